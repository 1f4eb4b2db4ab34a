use calc::mach::Engine;

/// Known symbols are operations, numbers are operands, the rest are
/// variables. Returns what the last word returned.
pub fn enter(engine: &mut Engine, words: &str) -> Option<f64> {
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

pub fn engine(words: &str) -> Engine {
    let mut e = Engine::new();
    enter(&mut e, words);
    e
}
