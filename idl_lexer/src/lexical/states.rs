//! Grammar state machine
//!
//! States form a closed enumeration; a single transition function takes the
//! current state and the scanner and returns the next state, or `None` to
//! terminate the run. The driver loops until a state returns `None`, which
//! happens only after a terminal lexeme (EOF or Error) has been appended.

use super::error::ScanError;
use super::scanner::Scanner;
use crate::grammar::{
    is_line_ending, is_list_separator, is_quoted_char, is_value_char, EntityKind,
};
use crate::lexemes::LexemeKind;

/// The grammar states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Top-level dispatcher; the initial state
    Dispatch,
    /// A `//` comment line
    Comment,
    /// A line matching no top-level construct
    Unknown,
    /// An entity head: keyword plus identifier list
    Entity(EntityKind),
    /// Indented tag/label lines following an entity head
    TagLine,
}

impl State {
    /// Run one transition, returning the next state or `None` to terminate
    pub fn step(self, scanner: &mut Scanner) -> Option<State> {
        match self {
            State::Dispatch => dispatch(scanner),
            State::Comment => comment(scanner),
            State::Unknown => unknown(scanner),
            State::Entity(kind) => entity(scanner, kind),
            State::TagLine => tag_line(scanner),
        }
    }
}

/// Drive the machine from Dispatch until a state terminates the run
pub fn run(scanner: &mut Scanner) {
    let mut state = State::Dispatch;

    while let Some(next) = state.step(scanner) {
        state = next;
    }
}

/// Append the terminal error lexeme and halt
fn halt(scanner: &mut Scanner, error: ScanError) -> Option<State> {
    scanner.fail(error);
    None
}

fn dispatch(scanner: &mut Scanner) -> Option<State> {
    if scanner.peek().is_none() {
        scanner.emit(LexemeKind::Eof);
        return None;
    }

    if scanner.accept_run(is_line_ending) {
        scanner.emit(LexemeKind::Eol);
        return Some(State::Dispatch);
    }

    if scanner.peek_str("//") {
        return Some(State::Comment);
    }

    for kind in EntityKind::ALL {
        if scanner.peek_str(kind.keyword_with_space()) {
            return Some(State::Entity(kind));
        }

        // A bare keyword with nothing after it on the line is an error; a
        // keyword glued to other text falls through to Unknown with the
        // cursor advanced but the pending span intact.
        if scanner.accept_str(kind.keyword())
            && (scanner.peek().is_none() || scanner.accept(is_line_ending))
        {
            let line = scanner.line();
            return halt(
                scanner,
                ScanError::MissingIdentifier {
                    keyword: kind.keyword(),
                    line,
                },
            );
        }
    }

    Some(State::Unknown)
}

fn unknown(scanner: &mut Scanner) -> Option<State> {
    scanner.accept_line();
    let text = scanner.value().to_string();
    let line = scanner.line();
    halt(scanner, ScanError::UnknownInput { text, line })
}

fn comment(scanner: &mut Scanner) -> Option<State> {
    scanner.accept_line();
    scanner.emit(LexemeKind::Comment);
    Some(State::Dispatch)
}

fn entity(scanner: &mut Scanner, kind: EntityKind) -> Option<State> {
    scanner.accept_str(kind.keyword());
    scanner.ignore();
    scanner.emit(kind.lexeme_kind());
    scanner.accept_run(|c| c == ' ');
    scanner.ignore();

    // 1-indexed list position, used only in diagnostics
    let mut position = 1;

    loop {
        if !scanner.accept_run(|c| kind.accepts(c)) {
            let line = scanner.line();
            return halt(
                scanner,
                ScanError::InvalidIdentifier {
                    entity: kind.label(),
                    line,
                    position,
                },
            );
        }

        if let Some(required) = kind.required_length() {
            if scanner.value().chars().count() != required {
                let line = scanner.line();
                return halt(
                    scanner,
                    ScanError::BadIdentifierLength {
                        entity: kind.label(),
                        line,
                        position,
                    },
                );
            }
        }

        scanner.emit(LexemeKind::Value);

        if scanner.accept_run(is_list_separator) {
            scanner.ignore();
            position += 1;
            continue;
        }

        if scanner.peek().is_none() {
            return Some(State::Dispatch);
        }

        if scanner.peek().map_or(false, is_line_ending) {
            scanner.accept_run(is_line_ending);
            scanner.emit(LexemeKind::Eol);
            break;
        }

        position += 1;
    }

    Some(State::TagLine)
}

fn tag_line(scanner: &mut Scanner) -> Option<State> {
    if !scanner.accept_run(|c| c == '\t') {
        return Some(State::Dispatch);
    }

    scanner.emit(LexemeKind::Space);

    // At most two fields per line: a bare label, or a key/value tag pair
    for _ in 0..2 {
        if scanner.peek() == Some('"') {
            scanner.next();
            scanner.ignore();

            if scanner.peek() == Some('"') {
                let line = scanner.line();
                return halt(scanner, ScanError::EmptyValue { line });
            }

            scanner.accept_run(is_quoted_char);

            match scanner.peek() {
                Some('"') => {
                    scanner.emit(LexemeKind::Value);
                    scanner.next();
                    scanner.ignore();
                }

                Some(c) if is_line_ending(c) => {
                    let line = scanner.line();
                    return halt(scanner, ScanError::UnclosedValue { line });
                }

                None => {
                    let line = scanner.line();
                    return halt(scanner, ScanError::UnclosedValue { line });
                }

                Some(character) => {
                    let line = scanner.line();
                    return halt(scanner, ScanError::InvalidCharacter { character, line });
                }
            }
        } else if scanner.accept_run(is_value_char) {
            scanner.emit(LexemeKind::Value);
        }

        if !scanner.accept_run(|c| c == ' ') {
            break;
        }

        scanner.ignore();
    }

    match scanner.peek() {
        None => return Some(State::Dispatch),
        Some(c) if is_line_ending(c) => {
            scanner.accept_run(is_line_ending);
            scanner.emit(LexemeKind::Eol);
        }
        Some(_) => {}
    }

    Some(State::TagLine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexemes::{Lexeme, LexemeKind};

    fn scan(input: &str) -> Vec<Lexeme> {
        let mut scanner = Scanner::new(input);
        run(&mut scanner);
        scanner.into_stream().into_iter().collect()
    }

    fn bare(kind: LexemeKind) -> Lexeme {
        Lexeme::bare(kind)
    }

    fn lex(kind: LexemeKind, text: &str) -> Lexeme {
        Lexeme::new(kind, text)
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(scan(""), vec![bare(LexemeKind::Eof)]);
    }

    #[test]
    fn test_single_comment() {
        assert_eq!(
            scan("// A comment line starts with two slashes"),
            vec![
                lex(LexemeKind::Comment, "// A comment line starts with two slashes"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_multiple_comments() {
        assert_eq!(
            scan("// A comment line starts with two slashes\n// Another comment!"),
            vec![
                lex(LexemeKind::Comment, "// A comment line starts with two slashes"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Comment, "// Another comment!"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_line_ending_variants() {
        for ending in ["\n", "\r", "\r\n"] {
            assert_eq!(
                scan(ending),
                vec![lex(LexemeKind::Eol, ending), bare(LexemeKind::Eof)],
                "for ending {:?}",
                ending
            );
        }
    }

    #[test]
    fn test_consecutive_newlines_merge_into_one_eol() {
        assert_eq!(
            scan("\n\n"),
            vec![lex(LexemeKind::Eol, "\n\n"), bare(LexemeKind::Eof)]
        );
    }

    #[test]
    fn test_unknown_input_line_1() {
        assert_eq!(
            scan("Hello"),
            vec![lex(LexemeKind::Error, "Unknown input 'Hello' on line 1")]
        );
    }

    #[test]
    fn test_unknown_input_line_2() {
        assert_eq!(
            scan("\nCheese"),
            vec![
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Error, "Unknown input 'Cheese' on line 2"),
            ]
        );
    }

    #[test]
    fn test_account_no_identifier() {
        assert_eq!(
            scan("Account"),
            vec![lex(LexemeKind::Error, "Account not specified on line 1")]
        );
    }

    #[test]
    fn test_account_valid() {
        assert_eq!(
            scan("Account 112233445566"),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "112233445566"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_account_short_id() {
        assert_eq!(
            scan("Account 1234567890"),
            vec![
                bare(LexemeKind::Account),
                lex(
                    LexemeKind::Error,
                    "Bad length account ID on line 1 position 1"
                ),
            ]
        );
    }

    #[test]
    fn test_account_long_id() {
        assert_eq!(
            scan("Account 1122334455667"),
            vec![
                bare(LexemeKind::Account),
                lex(
                    LexemeKind::Error,
                    "Bad length account ID on line 1 position 1"
                ),
            ]
        );
    }

    #[test]
    fn test_account_non_digit_id() {
        assert_eq!(
            scan("Account Word"),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Error, "Invalid account ID on line 1 position 1"),
            ]
        );
    }

    #[test]
    fn test_account_multiple_valid_with_loose_separators() {
        assert_eq!(
            scan("Account 000000000000, 111111111111,  222222222222 , 333333333333"),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "000000000000"),
                lex(LexemeKind::Value, "111111111111"),
                lex(LexemeKind::Value, "222222222222"),
                lex(LexemeKind::Value, "333333333333"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_account_valid_then_invalid_reports_list_position() {
        assert_eq!(
            scan("Account 000000000000, Bob,  222222222222 , 333333333333"),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "000000000000"),
                lex(LexemeKind::Error, "Invalid account ID on line 1 position 2"),
            ]
        );
    }

    #[test]
    fn test_account_basic_label() {
        assert_eq!(
            scan("Account 112233112233\n\tLabel1"),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "112233112233"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Label1"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_account_quoted_label() {
        assert_eq!(
            scan("Account 112233112233\n\t\"Developer Access\""),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "112233112233"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Developer Access"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_account_key_value_pair() {
        assert_eq!(
            scan("Account 112233112233\n\tKey1 Value1"),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "112233112233"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Key1"),
                lex(LexemeKind::Value, "Value1"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_account_key_value_pair_quoted_key() {
        assert_eq!(
            scan("Account 112233112233\n\t\"Hello World\" Value1"),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "112233112233"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Hello World"),
                lex(LexemeKind::Value, "Value1"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_account_key_value_pair_quoted_value() {
        assert_eq!(
            scan("Account 112233112233\n\tName \"Hello World\""),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "112233112233"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Name"),
                lex(LexemeKind::Value, "Hello World"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_account_key_value_pair_quoted_both() {
        assert_eq!(
            scan("Account 112233112233\n\t\"What a World\" \"Hello World\""),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "112233112233"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "What a World"),
                lex(LexemeKind::Value, "Hello World"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_account_multiple_labels() {
        assert_eq!(
            scan("Account 112233112233\n\tLabel1\n\tLabel2\n\t\"Label 3\""),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "112233112233"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Label1"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Label2"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Label 3"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_account_multiple_tags() {
        assert_eq!(
            scan(
                "Account 112233112233\n\tName Jonathan\n\tAge 36\n\t\"Favorite Pudding\" \"Rhubarb Crumble\""
            ),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "112233112233"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Name"),
                lex(LexemeKind::Value, "Jonathan"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Age"),
                lex(LexemeKind::Value, "36"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Favorite Pudding"),
                lex(LexemeKind::Value, "Rhubarb Crumble"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_account_tags_and_labels_mixed_across_blank_line() {
        assert_eq!(
            scan("Account 112233112233\n\tBilling\n\tOrganisations\n\tOwner Platform\n\n\tProduct Radio"),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "112233112233"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Billing"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Organisations"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Owner"),
                lex(LexemeKind::Value, "Platform"),
                lex(LexemeKind::Eol, "\n\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Product"),
                lex(LexemeKind::Value, "Radio"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_account_empty_tag_value() {
        assert_eq!(
            scan("Account 123456789012\n\tName \"\""),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "123456789012"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Name"),
                lex(LexemeKind::Error, "Empty value on line 2"),
            ]
        );
    }

    #[test]
    fn test_account_invalid_character_in_quoted_value() {
        assert_eq!(
            scan("Account 123456789012\n\tName \"?\""),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "123456789012"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Name"),
                lex(LexemeKind::Error, "Invalid character ? on line 2"),
            ]
        );
    }

    #[test]
    fn test_unclosed_quoted_value_at_line_ending() {
        assert_eq!(
            scan("Account 123456789012\n\tName \"Half\nDone"),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "123456789012"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Name"),
                lex(LexemeKind::Error, "Unclosed quoted value on line 2"),
            ]
        );
    }

    #[test]
    fn test_unclosed_quoted_value_at_end_of_input() {
        assert_eq!(
            scan("Account 123456789012\n\tName \"Half"),
            vec![
                bare(LexemeKind::Account),
                lex(LexemeKind::Value, "123456789012"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Name"),
                lex(LexemeKind::Error, "Unclosed quoted value on line 2"),
            ]
        );
    }

    #[test]
    fn test_group_no_identifier() {
        assert_eq!(
            scan("Group"),
            vec![lex(LexemeKind::Error, "Group not specified on line 1")]
        );
    }

    #[test]
    fn test_group_valid() {
        assert_eq!(
            scan("Group Developers"),
            vec![
                bare(LexemeKind::Group),
                lex(LexemeKind::Value, "Developers"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_group_multiple_valid() {
        assert_eq!(
            scan("Group Lovers, Haters"),
            vec![
                bare(LexemeKind::Group),
                lex(LexemeKind::Value, "Lovers"),
                lex(LexemeKind::Value, "Haters"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_group_valid_then_invalid() {
        assert_eq!(
            scan("Group Lovers, Haters, !!!"),
            vec![
                bare(LexemeKind::Group),
                lex(LexemeKind::Value, "Lovers"),
                lex(LexemeKind::Value, "Haters"),
                lex(LexemeKind::Error, "Invalid group ID on line 1 position 3"),
            ]
        );
    }

    #[test]
    fn test_group_labels_and_tags() {
        assert_eq!(
            scan("Group Infosec\n\tKey1 Value1\n\t\"Label 3\""),
            vec![
                bare(LexemeKind::Group),
                lex(LexemeKind::Value, "Infosec"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Key1"),
                lex(LexemeKind::Value, "Value1"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Label 3"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_group_digit_identifier_is_allowed() {
        assert_eq!(
            scan("Group 112233112233"),
            vec![
                bare(LexemeKind::Group),
                lex(LexemeKind::Value, "112233112233"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_user_no_identifier() {
        assert_eq!(
            scan("User"),
            vec![lex(LexemeKind::Error, "User not specified on line 1")]
        );
    }

    #[test]
    fn test_user_valid_then_invalid() {
        assert_eq!(
            scan("User Lovers, Haters, !!!"),
            vec![
                bare(LexemeKind::User),
                lex(LexemeKind::Value, "Lovers"),
                lex(LexemeKind::Value, "Haters"),
                lex(LexemeKind::Error, "Invalid user ID on line 1 position 3"),
            ]
        );
    }

    #[test]
    fn test_user_quoted_tag_pair() {
        assert_eq!(
            scan("User Session\n\t\"What a World\" \"Hello World\""),
            vec![
                bare(LexemeKind::User),
                lex(LexemeKind::Value, "Session"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "What a World"),
                lex(LexemeKind::Value, "Hello World"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_user_empty_tag_value() {
        assert_eq!(
            scan("User TeamB\n\tName \"\""),
            vec![
                bare(LexemeKind::User),
                lex(LexemeKind::Value, "TeamB"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Name"),
                lex(LexemeKind::Error, "Empty value on line 2"),
            ]
        );
    }

    #[test]
    fn test_role_no_identifier() {
        assert_eq!(
            scan("Role"),
            vec![lex(LexemeKind::Error, "Role not specified on line 1")]
        );
    }

    #[test]
    fn test_role_valid() {
        assert_eq!(
            scan("Role ReadOnly"),
            vec![
                bare(LexemeKind::Role),
                lex(LexemeKind::Value, "ReadOnly"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_role_invalid() {
        assert_eq!(
            scan("Role ?"),
            vec![
                bare(LexemeKind::Role),
                lex(LexemeKind::Error, "Invalid role ID on line 1 position 1"),
            ]
        );
    }

    #[test]
    fn test_role_valid_then_invalid() {
        assert_eq!(
            scan("Role ReadOnly, ?"),
            vec![
                bare(LexemeKind::Role),
                lex(LexemeKind::Value, "ReadOnly"),
                lex(LexemeKind::Error, "Invalid role ID on line 1 position 2"),
            ]
        );
    }

    #[test]
    fn test_role_with_policies() {
        assert_eq!(
            scan("Role ReadOnly, ReadAndWrite\n\tOneMorePolicy\n\tJustOneMorePolicy"),
            vec![
                bare(LexemeKind::Role),
                lex(LexemeKind::Value, "ReadOnly"),
                lex(LexemeKind::Value, "ReadAndWrite"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "OneMorePolicy"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "JustOneMorePolicy"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_keyword_glued_to_text_is_unknown_input() {
        assert_eq!(
            scan("Accounts"),
            vec![lex(LexemeKind::Error, "Unknown input 'Accounts' on line 1")]
        );
    }

    #[test]
    fn test_crlf_document() {
        assert_eq!(
            scan("Group Devs\r\n\tOwner Platform"),
            vec![
                bare(LexemeKind::Group),
                lex(LexemeKind::Value, "Devs"),
                lex(LexemeKind::Eol, "\r\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Owner"),
                lex(LexemeKind::Value, "Platform"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_entity_after_tag_block() {
        assert_eq!(
            scan("Group Devs\n\tBilling\nUser Alice"),
            vec![
                bare(LexemeKind::Group),
                lex(LexemeKind::Value, "Devs"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Billing"),
                lex(LexemeKind::Eol, "\n"),
                bare(LexemeKind::User),
                lex(LexemeKind::Value, "Alice"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_identifier_charset_covers_symbols() {
        assert_eq!(
            scan("User bob_smith-1.2@corp£$"),
            vec![
                bare(LexemeKind::User),
                lex(LexemeKind::Value, "bob_smith-1.2@corp£$"),
                bare(LexemeKind::Eof),
            ]
        );
    }

    #[test]
    fn test_determinism() {
        let input = "Account 112233112233\n\tName Jonathan\n\n// done";
        assert_eq!(scan(input), scan(input));
    }

    #[test]
    fn test_fail_fast_nothing_follows_an_error() {
        let inputs = [
            "Hello",
            "Account",
            "Account 123",
            "Group !",
            "User TeamB\n\tName \"\"",
            "Role ReadOnly, ?",
        ];

        for input in inputs {
            let items = scan(input);
            let error_at = items.iter().position(|l| l.is_error());
            assert_eq!(
                error_at,
                Some(items.len() - 1),
                "error must be last for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_line_numbers_increase_with_eol_runs() {
        // The blank line inside the tag block makes the error line 4
        assert_eq!(
            scan("Group Devs\n\tBilling\n\n\tName \"\""),
            vec![
                bare(LexemeKind::Group),
                lex(LexemeKind::Value, "Devs"),
                lex(LexemeKind::Eol, "\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Billing"),
                lex(LexemeKind::Eol, "\n\n"),
                lex(LexemeKind::Space, "\t"),
                lex(LexemeKind::Value, "Name"),
                lex(LexemeKind::Error, "Empty value on line 4"),
            ]
        );
    }
}
