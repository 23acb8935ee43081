//! End-to-end keypad sessions
//!
//! These tests drive the calculator the way a user would, one key at a time,
//! and check only what ends up on the display.

use libkeypad::types::parse_keys;
use libkeypad::{Calculator, Command, EngineConfig, Result, ERROR_TOKEN};

fn session(keys: &str) -> Result<Calculator> {
    let mut calc = Calculator::new();
    calc.press_all(parse_keys(keys.split_whitespace())?);
    Ok(calc)
}

#[test]
fn test_digits_concatenate() -> Result<()> {
    for keys in ["1", "1 2 3", "9 0 0 1", "4 0 4"] {
        let calc = session(keys)?;
        assert_eq!(calc.display(), keys.replace(' ', ""));
    }
    Ok(())
}

#[test]
fn test_leading_zero_replaced() -> Result<()> {
    assert_eq!(session("0 5")?.display(), "5");
    assert_eq!(session("0 0 0")?.display(), "0");
    Ok(())
}

#[test]
fn test_immediate_mode_ignores_precedence() -> Result<()> {
    assert_eq!(session("2 + 3 x 4 =")?.display(), "20");
    assert_eq!(session("1 0 - 4 / 2 =")?.display(), "3");
    Ok(())
}

#[test]
fn test_divide_by_zero_clears_trace() -> Result<()> {
    let calc = session("8 / 0 =")?;
    assert_eq!(calc.display(), ERROR_TOKEN);
    assert_eq!(calc.trace(), "");
    Ok(())
}

#[test]
fn test_sqrt_of_negative() -> Result<()> {
    let mut calc = session("1 - 2 =")?;
    assert_eq!(calc.display(), "-1");

    calc.press(Command::Scientific(libkeypad::ScientificFn::Sqrt));
    assert_eq!(calc.display(), "Invalid input");
    assert!(calc.state().new_entry);

    calc.press(Command::Digit(7));
    assert_eq!(calc.display(), "7");
    Ok(())
}

#[test]
fn test_factorial_domain() -> Result<()> {
    assert_eq!(session("5 n!")?.display(), "120");
    assert_eq!(session("0 - 3 = n!")?.display(), "Invalid input");
    assert_eq!(session("2.5 n!")?.display(), "Invalid input");
    assert_eq!(session("1 7 1 n!")?.display(), "Overflow");
    Ok(())
}

#[test]
fn test_memory_round_trip() -> Result<()> {
    let mut calc = session("c 10 m+ 3 m+ mr")?;
    assert_eq!(calc.display(), "13");

    calc.press_all(parse_keys(["mc", "mr"])?);
    assert_eq!(calc.display(), "13");
    assert_eq!(calc.snapshot().memory, None);
    Ok(())
}

#[test]
fn test_memory_subtract_then_use_in_operation() -> Result<()> {
    let calc = session("4 m- 1 0 + mr =")?;
    assert_eq!(calc.display(), "6");
    Ok(())
}

#[test]
fn test_double_equals_idempotent() -> Result<()> {
    let mut calc = session("4 2")?;
    calc.press(Command::Equals);
    assert_eq!(calc.display(), "42");
    calc.press(Command::Equals);
    assert_eq!(calc.display(), "42");
    Ok(())
}

#[test]
fn test_scientific_rounding() -> Result<()> {
    assert_eq!(session("3 0 sin")?.display(), "0.5");
    assert_eq!(session("6 0 cos")?.display(), "0.5");
    assert_eq!(session("2 sqrt")?.display(), "1.41421356");
    Ok(())
}

#[test]
fn test_trace_follows_input() -> Result<()> {
    let calc = session("( 1 2 + 3")?;
    assert_eq!(calc.trace(), "( 12 + 3");

    let calc = session("( 1 2 + 3 ) =")?;
    assert_eq!(calc.display(), "15");
    assert_eq!(calc.trace(), "( 15 )");
    Ok(())
}

#[test]
fn test_clear_returns_to_initial_state() -> Result<()> {
    let mut calc = session("7 m+ 8 / 0 =")?;
    calc.press(Command::Clear);

    let snapshot = calc.snapshot();
    assert_eq!(snapshot.display, "0");
    assert_eq!(snapshot.trace, "");
    assert!(!snapshot.error);
    assert_eq!(snapshot.pending, None);
    assert_eq!(snapshot.memory, None);
    Ok(())
}

#[test]
fn test_custom_precision() -> Result<()> {
    let mut calc = Calculator::with_options(EngineConfig {
        precision: 3,
        ..EngineConfig::default()
    });
    calc.press_all(parse_keys(["2", "sqrt"])?);
    assert_eq!(calc.display(), "1.414");

    calc.press(Command::Clear);
    calc.press_all(parse_keys(["3", "sqrt"])?);
    assert_eq!(calc.display(), "1.732");
    Ok(())
}

#[test]
fn test_snapshot_serializes() -> Result<()> {
    let calc = session("6 x")?;
    let json = serde_json::to_value(calc.snapshot()).unwrap();
    assert_eq!(json["display"], "6");
    assert_eq!(json["trace"], "6 ×");
    assert_eq!(json["pending"], "multiply");
    assert_eq!(json["error"], false);
    Ok(())
}
