mod coverage_tests;
mod recovery_tests;
