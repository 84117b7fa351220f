mod clock_steps;
mod name_steps;
mod scoring_steps;
mod winner_steps;
