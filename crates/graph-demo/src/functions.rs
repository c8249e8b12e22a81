// File: crates/graph-demo/src/functions.rs
// Summary: Named single-variable functions selectable from the command line.

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NamedFunction {
    Square,
    Cube,
    Sin,
    Cos,
    Tan,
    Inverse,
    Sqrt,
    Ln,
    Exp,
}

impl NamedFunction {
    pub fn eval(self, x: f64) -> f64 {
        match self {
            NamedFunction::Square => x * x,
            NamedFunction::Cube => x * x * x,
            NamedFunction::Sin => x.sin(),
            NamedFunction::Cos => x.cos(),
            NamedFunction::Tan => x.tan(),
            NamedFunction::Inverse => 1.0 / x,
            NamedFunction::Sqrt => x.sqrt(),
            NamedFunction::Ln => x.ln(),
            NamedFunction::Exp => x.exp(),
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            NamedFunction::Square => "x^2",
            NamedFunction::Cube => "x^3",
            NamedFunction::Sin => "sin(x)",
            NamedFunction::Cos => "cos(x)",
            NamedFunction::Tan => "tan(x)",
            NamedFunction::Inverse => "1/x",
            NamedFunction::Sqrt => "sqrt(x)",
            NamedFunction::Ln => "ln(x)",
            NamedFunction::Exp => "e^x",
        }
    }
}
