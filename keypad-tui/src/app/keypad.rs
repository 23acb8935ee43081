//! Keypad layout
//!
//! The button grid is data: rendering and mouse hit-testing both read the
//! same table, so a click always lands on the button that was drawn there.

use libkeypad::{Command, MemoryCommand, Operator, ScientificFn};
use ratatui::layout::Rect;

/// Grid columns
pub const COLUMNS: u16 = 5;

/// Grid rows
pub const ROWS: u16 = 7;

/// Visual group of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Memory,
    Clear,
    Function,
    Digit,
    Operator,
}

/// One keypad button, positioned in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub command: Command,
    pub row: u16,
    pub col: u16,
    pub width: u16,
    pub height: u16,
}

impl Button {
    const fn cell(label: &'static str, command: Command, row: u16, col: u16) -> Self {
        Self {
            label,
            command,
            row,
            col,
            width: 1,
            height: 1,
        }
    }

    const fn span(self, width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    pub fn kind(&self) -> ButtonKind {
        match self.command {
            Command::Memory(_) => ButtonKind::Memory,
            Command::Clear => ButtonKind::Clear,
            Command::Scientific(_) | Command::OpenParen | Command::CloseParen => {
                ButtonKind::Function
            }
            Command::Digit(_) | Command::DecimalPoint => ButtonKind::Digit,
            Command::Operator(_) | Command::Equals => ButtonKind::Operator,
        }
    }

    /// Does this button cover grid cell (row, col)?
    pub fn covers(&self, row: u16, col: u16) -> bool {
        row >= self.row && row < self.row + self.height && col >= self.col && col < self.col + self.width
    }
}

const fn sci(f: ScientificFn) -> Command {
    Command::Scientific(f)
}

const fn op(o: Operator) -> Command {
    Command::Operator(o)
}

const fn mem(m: MemoryCommand) -> Command {
    Command::Memory(m)
}

/// The keypad, row by row
pub const BUTTONS: [Button; 33] = [
    Button::cell("MC", mem(MemoryCommand::Clear), 0, 0),
    Button::cell("MR", mem(MemoryCommand::Recall), 0, 1),
    Button::cell("M-", mem(MemoryCommand::Subtract), 0, 2),
    Button::cell("M+", mem(MemoryCommand::Add), 0, 3),
    Button::cell("C", Command::Clear, 0, 4),
    Button::cell("log", sci(ScientificFn::Log10), 1, 0),
    Button::cell("ln", sci(ScientificFn::Ln), 1, 1),
    Button::cell("e^x", sci(ScientificFn::Exp), 1, 2),
    Button::cell("n!", sci(ScientificFn::Factorial), 1, 3),
    Button::cell("1/x", sci(ScientificFn::Reciprocal), 1, 4),
    Button::cell("sin", sci(ScientificFn::Sin), 2, 0),
    Button::cell("cos", sci(ScientificFn::Cos), 2, 1),
    Button::cell("tan", sci(ScientificFn::Tan), 2, 2),
    Button::cell("(", Command::OpenParen, 2, 3),
    Button::cell(")", Command::CloseParen, 2, 4),
    Button::cell("7", Command::Digit(7), 3, 0),
    Button::cell("8", Command::Digit(8), 3, 1),
    Button::cell("9", Command::Digit(9), 3, 2),
    Button::cell("√", sci(ScientificFn::Sqrt), 3, 3),
    Button::cell("÷", op(Operator::Divide), 3, 4),
    Button::cell("4", Command::Digit(4), 4, 0),
    Button::cell("5", Command::Digit(5), 4, 1),
    Button::cell("6", Command::Digit(6), 4, 2),
    Button::cell("x²", sci(ScientificFn::Square), 4, 3),
    Button::cell("×", op(Operator::Multiply), 4, 4),
    Button::cell("1", Command::Digit(1), 5, 0),
    Button::cell("2", Command::Digit(2), 5, 1),
    Button::cell("3", Command::Digit(3), 5, 2),
    Button::cell("=", Command::Equals, 5, 3).span(1, 2),
    Button::cell("-", op(Operator::Subtract), 5, 4),
    Button::cell("0", Command::Digit(0), 6, 0).span(2, 1),
    Button::cell(".", Command::DecimalPoint, 6, 2),
    Button::cell("+", op(Operator::Add), 6, 4),
];

/// Button covering a grid cell
pub fn button_at(row: u16, col: u16) -> Option<&'static Button> {
    BUTTONS.iter().find(|b| b.covers(row, col))
}

/// First terminal column/row of grid line `index` when `total` cells share `len`.
fn edge(index: u16, total: u16, len: u16) -> u16 {
    let (index, total, len) = (u32::from(index), u32::from(total), u32::from(len));
    ((index * len + total - 1) / total) as u16
}

/// Screen rectangle of a button inside the keypad area
pub fn button_rect(area: Rect, button: &Button) -> Rect {
    let left = edge(button.col, COLUMNS, area.width);
    let right = edge(button.col + button.width, COLUMNS, area.width);
    let top = edge(button.row, ROWS, area.height);
    let bottom = edge(button.row + button.height, ROWS, area.height);

    Rect::new(area.x + left, area.y + top, right - left, bottom - top)
}

/// Map a terminal cell to the keypad button drawn there
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Command> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x || row < area.y || column >= area.x + area.width || row >= area.y + area.height {
        return None;
    }

    let col = (u32::from(column - area.x) * u32::from(COLUMNS) / u32::from(area.width)) as u16;
    let grid_row = (u32::from(row - area.y) * u32::from(ROWS) / u32::from(area.height)) as u16;

    button_at(grid_row, col).map(|b| b.command)
}
