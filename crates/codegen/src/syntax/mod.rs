pub mod model;
pub mod schema;

/// Turn decorator tokens into a fluent call chain, e.g.
/// `["unsigned", "default(0)"]` => `->unsigned()->default(0)`.
/// Tokens already carrying parens are appended untouched.
pub fn decorator_chain(decorators: &[String]) -> String {
    let mut output = String::new();

    for decorator in decorators {
        output.push_str("->");
        output.push_str(decorator);

        // Do we need to tack on the parens?
        if !decorator.contains('(') {
            output.push_str("()");
        }
    }

    output
}
