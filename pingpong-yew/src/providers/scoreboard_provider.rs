use crate::hooks::{ScoreboardContext, use_clock_interval};
use pingpong_core::{
    Scoreboard, ScoreboardCommand, ScoreboardConfig, ScoreboardEvent, ScoreboardEventLoop,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScoreboardProviderProps {
    #[prop_or_default]
    pub config: ScoreboardConfig,
    pub children: Children,
}

/// Reducer state: the event loop and the events the last command produced
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreboardState {
    event_loop: ScoreboardEventLoop,
    last_events: Vec<ScoreboardEvent>,
}

impl ScoreboardState {
    pub fn new(config: &ScoreboardConfig) -> Self {
        Self {
            event_loop: ScoreboardEventLoop::new(config),
            last_events: Vec::new(),
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        self.event_loop.scoreboard()
    }

    pub fn last_events(&self) -> &[ScoreboardEvent] {
        &self.last_events
    }
}

impl Reducible for ScoreboardState {
    type Action = ScoreboardCommand;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut event_loop = self.event_loop.clone();
        let last_events = event_loop.handle_command(action);

        for event in &last_events {
            tracing::debug!("📥 {:?}", event);
        }

        Rc::new(Self {
            event_loop,
            last_events,
        })
    }
}

/// Owns scoreboard state for its children and drives the match clock.
///
/// A one-second interval exists only while the clock is running. The effect
/// cleanup drops it when the clock stops or the provider unmounts, so no tick
/// is dispatched afterwards.
#[function_component(ScoreboardProvider)]
pub fn scoreboard_provider(props: &ScoreboardProviderProps) -> Html {
    let state = {
        let config = props.config.clone();
        use_reducer(move || ScoreboardState::new(&config))
    };

    let running = state.scoreboard().clock().is_running();
    let tick_interval_ms = props.config.tick_interval_ms;

    {
        let dispatcher = state.dispatcher();
        use_clock_interval(
            running,
            tick_interval_ms,
            Callback::from(move |_| dispatcher.dispatch(ScoreboardCommand::Tick)),
        );
    }

    let send_command = {
        let dispatcher = state.dispatcher();
        Rc::new(move |cmd: ScoreboardCommand| {
            dispatcher.dispatch(cmd);
        }) as Rc<dyn Fn(ScoreboardCommand)>
    };

    let context = ScoreboardContext {
        scoreboard: state.scoreboard().clone(),
        send_command,
    };

    html! {
        <ContextProvider<ScoreboardContext> {context}>
            {props.children.clone()}
        </ContextProvider<ScoreboardContext>>
    }
}
