use crate::environment::Environment;

/// Substitutes every whitespace-delimited `$name` token with its value.
///
/// Unknown names, and a bare `$`, expand to nothing. Each resulting token is
/// followed by one space, so `echo $x` with `x=hi` becomes `"echo hi "`.
pub fn expand(line: &str, env: &Environment) -> String {
    let mut expanded = String::with_capacity(line.len());
    for token in line.split_whitespace() {
        match token.strip_prefix('$') {
            Some(name) => {
                if let Some(value) = env.get(name) {
                    expanded.push_str(value);
                }
            }
            None => expanded.push_str(token),
        }
        expanded.push(' ');
    }
    expanded
}
