mod clauses_tests;
mod statements_tests;
