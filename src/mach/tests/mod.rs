use crate::mach::Engine;


/// Applies each word the way a keypad would: known symbols are operations,
/// numbers are operands and anything else is a variable.
fn enter(engine: &mut Engine, words: &str) -> Option<f64> {
    let mut result = engine.evaluate();
    for word in words.split_whitespace() {
        result = if engine.symbols().contains(word) {
            engine.perform_operation(word)
        } else if let Ok(v) = word.parse::<f64>() {
            engine.push_operand(v)
        } else {
            engine.push_variable(word)
        };
    }
    result
}
