mod api_scenarios;
pub mod support;
