#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

/// A binary operator: how tightly it binds and what it computes.
#[derive(Debug)]
pub struct Operator {
    pub symbol: char,
    pub precedence: usize,
    pub assoc: Assoc,
    pub apply: fn(f64, f64) -> f64,
}

impl Operator {
    /// `+` and `-` may also appear as prefix signs.
    pub fn can_be_unary(&self) -> bool {
        self.symbol == '+' || self.symbol == '-'
    }

    /// Should `self`, sitting on top of the operator stack, be emitted
    /// before `incoming` gets pushed?
    pub fn yields_to(&self, incoming: &Operator) -> bool {
        self.precedence > incoming.precedence
            || (self.precedence == incoming.precedence && incoming.assoc == Assoc::Left)
    }
}

fn power(l: f64, r: f64) -> f64 { l.powf(r) }
fn multiply(l: f64, r: f64) -> f64 { l * r }
fn divide(l: f64, r: f64) -> f64 { l / r }
fn add(l: f64, r: f64) -> f64 { l + r }
fn subtract(l: f64, r: f64) -> f64 { l - r }

static OPERATORS: [Operator; 5] = [
    Operator { symbol: '^', precedence: 3, assoc: Assoc::Right, apply: power },
    Operator { symbol: '*', precedence: 2, assoc: Assoc::Left, apply: multiply },
    Operator { symbol: '/', precedence: 2, assoc: Assoc::Left, apply: divide },
    Operator { symbol: '+', precedence: 1, assoc: Assoc::Left, apply: add },
    Operator { symbol: '-', precedence: 1, assoc: Assoc::Left, apply: subtract },
];

pub fn lookup(symbol: char) -> Option<&'static Operator> {
    OPERATORS.iter().find(|op| op.symbol == symbol)
}

///////////////////////////////////////////////////////////////////////////////
