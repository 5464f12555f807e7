mod fixture;

mod graph_tests;
mod quiz_tests;
mod scenario_tests;
mod sweep_tests;
