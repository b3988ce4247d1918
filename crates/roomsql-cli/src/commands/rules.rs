use roomsql_lib::Rule;

pub struct RulesArgs {
    pub statements: bool,
}

pub fn run(args: RulesArgs) {
    for rule in Rule::ALL
        .iter()
        .filter(|rule| !args.statements || rule.is_statement())
    {
        println!("{}", rule.name());
    }
}
