use summa::{Operation, ValidationError, add, calculate, divide, multiply, subtract};

fn assert_value(result: Result<String, ValidationError>, expected: &str) {
    match result {
        Ok(value) => assert_eq!(value, expected),
        Err(e) => panic!("Calculation failed: {e}"),
    }
}

fn assert_error(result: Result<String, ValidationError>, expected: &str) {
    match result {
        Ok(value) => panic!("Calculation returned '{value}' but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), expected),
    }
}

#[test]
fn empty_input_is_zero_for_every_operation() {
    assert_value(add(""), "0");
    assert_value(multiply(""), "0");
    assert_value(subtract(""), "0");
    assert_value(divide(""), "0");
}

#[test]
fn single_number_is_returned_unchanged() {
    assert_value(add("1"), "1");
    assert_value(add("42"), "42");
}

#[test]
fn sums_with_default_separators() {
    assert_value(add("1,1"), "2");
    assert_value(add("1,1,3.3"), "5.3");
}

#[test]
fn newline_and_comma_are_interchangeable() {
    assert_value(add("1\n1,6"), "8");
    assert_value(add("1\n2\n3"), "6");
}

#[test]
fn fractional_sums_keep_decimals() {
    assert_value(add("1.2,1"), "2.2");
}

#[test]
fn multiplication_subtraction_division() {
    assert_value(multiply("2,2"), "4");
    assert_value(subtract("8,2"), "6");
    assert_value(subtract("10,2,3"), "5");
    assert_value(divide("8,2,2"), "2");
    assert_value(divide("15,3,2"), "2.5");
}

#[test]
fn division_keeps_full_precision() {
    assert_value(divide("15.2,3"), "5.066666666666666");
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_value(divide("8,0"), "inf");
    assert_value(divide("0,0"), "NaN");
}

#[test]
fn custom_separator_declarations() {
    assert_value(add("//;\n1;2"), "3");
    assert_value(add("//sep\n2sep3"), "5");
    assert_value(multiply("//;\n2;3;4"), "24");
}

#[test]
fn escaped_pipe_is_a_literal_separator() {
    assert_value(add("//\\|\n1|2|3"), "6");
}

#[test]
fn trailing_separator_is_reported() {
    assert_error(add("1,3,"), "Number expected but EOF found.");
    assert_error(add("1\n2\n"), "Number expected but EOF found.");
    assert_error(add("//;\n1;2;"), "Number expected but EOF found.");
}

#[test]
fn unexpected_character_is_reported() {
    assert_error(add("1,2x"), "',\n' expected but 'x' found at position 3.");
}

#[test]
fn unexpected_character_with_custom_separator() {
    assert_error(add("//\\|\n1|2,3"), "'\\|' expected but ',' found at position 3.");
}

#[test]
fn missing_number_between_separators() {
    assert_error(add("1,,2"), "Number expected but ',' found at position 2.");
    assert_error(add("//;\n1;;2"), "Number expected but ';' found at position 2.");
}

#[test]
fn negative_numbers_are_collected() {
    assert_error(add("-1,2"), "Negative not allowed : -1");
    assert_error(add("2,-4,-5"), "Negative not allowed : -4, -5");
    assert_error(multiply("2,-4.7"), "Negative not allowed : -4");
}

#[test]
fn multiple_errors_are_position_ordered() {
    assert_error(add("-1,,2"),
                 "Negative not allowed : -1\nNumber expected but ',' found at position 3.");
    assert_error(add("1,2x,3,"),
                 "',\n' expected but 'x' found at position 3.\nNumber expected but EOF found.");
}

#[test]
fn malformed_number_is_reported() {
    assert_error(add("1,1.2.3"), "Number expected but '1.2.3' found at position 2.");
    assert_error(add(",1"), "Number expected but '' found at position 0.");
}

#[test]
fn repeated_calls_are_idempotent() {
    assert_eq!(add("1,2,3"), add("1,2,3"));
    assert_eq!(divide("15.2,3"), divide("15.2,3"));
    assert_eq!(add("1,3,"), add("1,3,"));
}

#[test]
fn every_operation_shares_validation() {
    for operation in [Operation::Add, Operation::Multiply, Operation::Subtract, Operation::Divide] {
        assert_error(calculate("1,3,", operation), "Number expected but EOF found.");
    }
}
