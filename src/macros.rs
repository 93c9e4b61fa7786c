//!

/// Build a pattern matching a key press.
///
/// ```text
/// key!('x')             the char 'x' without modifiers
/// key!(@c)              any char without modifiers, bound to `c`
/// key!(CONTROL-'w')     'w' with the given modifier(s)
/// key!(SHIFT-@c)        any char with the given modifier(s), bound to `c`
/// key!(@name Home)      a named key without modifiers
/// key!(@name ALT-Left)  a named key with the given modifier(s)
/// ```
macro_rules! key {
    (@name $($modifier:ident)|+ - $name:ident) => {
        // The key `$modifier` is expected to be one of
        // {SHIFT, CONTROL, ALT, SUPER, HYPER, META, NONE}
        KeyEvent {
            modifiers: $(KeyModifiers::$modifier)|+,
            code: KeyCode::$name,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            state: _,
        }
    };
    (@name $name:ident) => {
        KeyEvent {
            modifiers: KeyModifiers::NONE,
            code: KeyCode::$name,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            state: _,
        }
    };
    ($($modifier:ident)|+ - @$char:ident) => {
        KeyEvent {
            modifiers: $(KeyModifiers::$modifier)|+,
            code: KeyCode::Char($char),
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            state: _,
        }
    };
    ($($modifier:ident)|+ - $char:expr) => {
        KeyEvent {
            modifiers: $(KeyModifiers::$modifier)|+,
            code: KeyCode::Char($char),
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            state: _,
        }
    };
    (@$char:ident) => {
        KeyEvent {
            modifiers: KeyModifiers::NONE,
            code: KeyCode::Char($char),
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            state: _,
        }
    };
    ($char:expr) => {
        KeyEvent {
            modifiers: KeyModifiers::NONE,
            code: KeyCode::Char($char),
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            state: _,
        }
    };
}

pub(crate) use key;
