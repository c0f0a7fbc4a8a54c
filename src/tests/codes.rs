//! Bit encoding, aliases, and the predicate truth table.

use crate::{code_name, Code, Outcome};

const ALL_CODES: [Code; 4] = [Code::OkDone, Code::NgDone, Code::OkCont, Code::NgCont];

#[test]
fn bit_encoding() {
    assert_eq!(Code::OkDone.bits(), 0);
    assert_eq!(Code::NgDone.bits(), Code::EMPTY_BIT);
    assert_eq!(Code::OkCont.bits(), Code::INCOMPLETE_BIT);
    assert_eq!(Code::NgCont.bits(), Code::EMPTY_BIT | Code::INCOMPLETE_BIT);

    assert!(!Code::OkDone.is_empty());
    assert!(Code::NgDone.is_empty());
    assert!(!Code::OkDone.is_incomplete());
    assert!(Code::OkCont.is_incomplete());
}

#[test]
fn aliases_compare_equal_to_canonical() {
    assert_eq!(Code::OK_CONTINUE, Code::OkCont);
    assert_eq!(Code::NG_CONTINUE, Code::NgCont);
    assert_eq!(Code::NG_RETRY, Code::NgCont);
    assert_eq!(Code::NG_BLOCKED, Code::NgCont);
    assert_eq!(Code::BLOCKED, Code::NgCont);
    assert_eq!(Code::NG_EOF, Code::NgDone);
    assert_eq!(Code::FINISHED, Code::NgDone);
}

#[test]
fn alias_outcomes_are_observably_identical() {
    let cases: [(Code, &[Code]); 3] = [
        (Code::OkCont, &[Code::OK_CONTINUE]),
        (
            Code::NgCont,
            &[Code::NG_CONTINUE, Code::NG_RETRY, Code::NG_BLOCKED, Code::BLOCKED],
        ),
        (Code::NgDone, &[Code::NG_EOF, Code::FINISHED]),
    ];

    for (canonical, aliases) in cases {
        let want = Outcome::from_code(canonical);
        for &alias in aliases {
            let rc = Outcome::from_code(alias);
            assert_eq!(rc, want);
            assert_eq!(rc.code_str(), want.code_str());
            assert_eq!(rc.is_ok(), want.is_ok());
            assert_eq!(rc.is_finished(), want.is_finished());
            assert_eq!(rc.is_error(), want.is_error());
        }
    }
}

#[test]
fn predicate_truth_table() {
    for (code, ok, finished) in [
        (Code::OkDone, true, true),
        (Code::NgDone, false, true),
        (Code::OkCont, true, false),
        (Code::NgCont, false, false),
    ] {
        let rc = Outcome::from_code(code);

        assert!(!rc.is_error());
        assert!(rc.no_error());
        assert_eq!(rc.has_results(), ok);
        assert_eq!(rc.is_ok(), ok);
        assert_eq!(rc.has_no_results(), !ok);
        assert_eq!(rc.is_ng(), !ok);
        assert_eq!(rc.is_finished(), finished);
        assert_eq!(rc.is_done(), finished);
        assert_eq!(rc.is_blocked(), !finished);
        assert_eq!(rc.is_not_finished(), !finished);

        assert_eq!(rc.code(), Some(code));
        assert_eq!(rc.message(), None);
    }
}

#[test]
fn predicates_are_complements() {
    let values = [
        Outcome::OK_DONE,
        Outcome::NG_DONE,
        Outcome::OK_CONT,
        Outcome::NG_CONT,
        Outcome::from_message("boom"),
        Outcome::default(),
    ];

    for rc in values {
        assert_ne!(rc.is_error(), rc.no_error());
        assert_ne!(rc.has_results(), rc.has_no_results());
        assert_ne!(rc.is_finished(), rc.is_blocked());
    }
}

#[test]
fn code_str_canonical_names() {
    assert_eq!(Outcome::OK_DONE.code_str(), "OK_DONE");
    assert_eq!(Outcome::NG_DONE.code_str(), "NG_EOF");
    assert_eq!(Outcome::OK_CONT.code_str(), "OK_CONT");
    assert_eq!(Outcome::NG_CONT.code_str(), "NG_BLOCKED");
    assert_eq!(Outcome::from_message("anything").code_str(), "ERROR");
}

#[test]
fn raw_word_rendering() {
    assert_eq!(code_name(0), "OK_DONE");
    assert_eq!(code_name(1), "EOF");
    assert_eq!(code_name(2), "OK_CONT");
    assert_eq!(code_name(3), "BLOCKED");
    assert_eq!(code_name(4), "(UNKNOWN)");
    assert_eq!(code_name(usize::MAX), "(UNKNOWN)");
}

#[test]
fn raw_word_round_trip() {
    for code in ALL_CODES {
        assert_eq!(Code::from_raw(code.bits() as usize), Some(code));
        assert_eq!(Code::try_from(code.bits() as usize), Ok(code));
        assert_eq!(usize::from(code), code.bits() as usize);
    }

    assert_eq!(Code::from_raw(4), None);
    assert_eq!(Code::try_from(9), Err(9));
}

#[test]
fn outcome_consts_match_codes() {
    assert_eq!(Outcome::OK_DONE, Outcome::from_code(Code::OkDone));
    assert_eq!(Outcome::NG_DONE, Outcome::from_code(Code::NgDone));
    assert_eq!(Outcome::OK_CONT, Outcome::from_code(Code::OkCont));
    assert_eq!(Outcome::NG_CONT, Outcome::from_code(Code::NgCont));
    assert_eq!(Outcome::EOF, Outcome::NG_DONE);
    assert_eq!(Outcome::BLOCKED, Outcome::NG_CONT);

    assert_eq!(Outcome::from(Code::OkDone), Outcome::OK_DONE);
}
