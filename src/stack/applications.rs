use crate::stack::Stack;

/// Reverse `text` by pushing every character and popping them back off.
pub fn reverse_string(text: &str) -> String {
    let mut stack = Stack::new();
    for ch in text.chars() {
        stack.push(ch);
    }

    let mut reversed = String::with_capacity(text.len());
    while let Some(ch) = stack.pop() {
        reversed.push(ch);
    }
    reversed
}

fn closer_for(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Check that `()`, `{}` and `[]` in `expression` nest and match correctly.
/// Other characters are ignored.
pub fn is_balanced(expression: &str) -> bool {
    let mut stack = Stack::new();

    for ch in expression.chars() {
        if let Some(closer) = closer_for(ch) {
            stack.push(closer);
        } else if matches!(ch, ')' | '}' | ']') {
            match stack.pop() {
                Some(expected) if expected == ch => {}
                _ => return false,
            }
        }
    }

    stack.is_empty()
}

/// Binary digits of `number`, most significant first.
pub fn decimal_to_binary(mut number: u64) -> String {
    if number == 0 {
        return "0".to_string();
    }

    let mut stack = Stack::new();
    while number > 0 {
        stack.push(number % 2);
        number /= 2;
    }

    let mut binary = String::with_capacity(stack.len());
    while let Some(bit) = stack.pop() {
        binary.push(if bit == 1 { '1' } else { '0' });
    }
    binary
}
