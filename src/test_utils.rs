mod collector_tester;

pub use collector_tester::*;
