use crate::pages::ScoreboardScreen;
use crate::providers::ScoreboardProvider;
use pingpong_core::ScoreboardConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    /// Starting state; URL query parameters are applied on top
    #[prop_or_default]
    pub config: ScoreboardConfig,
}

/// Overlay `player1`, `player2` and `fresh` query parameters on a config
fn apply_query_params(
    mut config: ScoreboardConfig,
    get: impl Fn(&str) -> Option<String>,
) -> ScoreboardConfig {
    if let Some(name) = get("player1") {
        config.player_one_name = name;
    }
    if let Some(name) = get("player2") {
        config.player_two_name = name;
    }
    if get("fresh").is_some() {
        config.initial_scores = (0, 0);
    }
    config
}

/// Read scoreboard overrides from the page URL
fn config_from_url(config: ScoreboardConfig) -> ScoreboardConfig {
    if let Some(window) = web_sys::window() {
        if let Ok(url) = window.location().href() {
            if let Ok(parsed) = web_sys::Url::new(&url) {
                let params = parsed.search_params();
                tracing::debug!("Applying URL parameters to scoreboard config");
                return apply_query_params(config, |key| params.get(key));
            }
        }
    }
    config
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = use_memo(props.config.clone(), |config| {
        config_from_url(config.clone())
    });

    html! {
        <div class="app">
            <ScoreboardProvider config={(*config).clone()}>
                <ScoreboardScreen />
            </ScoreboardProvider>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_params_keeps_config() {
        let config = apply_query_params(ScoreboardConfig::default(), |_| None);
        assert_eq!(config, ScoreboardConfig::default());
    }

    #[test]
    fn test_names_from_params() {
        let params = params(&[("player1", "Alice"), ("player2", "Bob")]);
        let config =
            apply_query_params(ScoreboardConfig::default(), |key| params.get(key).cloned());

        assert_eq!(config.player_one_name, "Alice");
        assert_eq!(config.player_two_name, "Bob");
        assert_eq!(config.initial_scores, (9, 11));
    }

    #[test]
    fn test_fresh_param_zeroes_scores() {
        let params = params(&[("fresh", "")]);
        let config =
            apply_query_params(ScoreboardConfig::default(), |key| params.get(key).cloned());

        assert_eq!(config.initial_scores, (0, 0));
    }
}
