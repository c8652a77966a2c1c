use std::{cell::RefCell, rc::Rc, str::from_utf8};

use till::{
    ledger::LedgerError,
    request::RequestError,
    runner::{OperationError, Service},
};

const TEST_FILE: &str = include_str!("operations.csv");

#[test]
fn run_operation_script() {
    let mut output = Vec::new();
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&errors);
    let service = Service {
        input: TEST_FILE.as_bytes(),
        output: &mut output,
        error_printer: Box::new(move |_line, err| sink.borrow_mut().push(err)),
    };
    service.run().unwrap();

    let output = from_utf8(&output).unwrap();
    let (balances, history) = output.split_once("\n\n").unwrap();

    // Seed 1000.00/500.00, then +100, -200, -300 on account 1 and +300
    // on account 2; every other row in the script is rejected.
    assert_eq!(balances, "account,balance\n1,600.00\n2,800.00");

    let history: Vec<&str> = history.lines().collect();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0], "kind,amount,from,to,timestamp");
    assert!(history[1].starts_with("deposit,100.00,,1,"));
    assert!(history[2].starts_with("withdraw,200.00,1,,"));
    assert!(history[3].starts_with("transfer,300.00,1,2,"));

    let errors = errors.borrow();
    assert_eq!(errors.len(), 4);
    assert!(matches!(
        errors[0],
        OperationError::Ledger(LedgerError::InsufficientFunds { .. })
    ));
    assert!(matches!(
        errors[1],
        OperationError::Ledger(LedgerError::InvalidArgument { .. })
    ));
    assert!(matches!(
        errors[2],
        OperationError::Ledger(LedgerError::NotFound { id: 999 })
    ));
    assert!(matches!(
        errors[3],
        OperationError::Request(RequestError::MissingFrom { .. })
    ));
}

#[test]
fn empty_script_prints_seed_balances_and_no_history() {
    let mut output = Vec::new();
    let service = Service {
        input: "op,from,to,amount\n".as_bytes(),
        output: &mut output,
        error_printer: Box::new(|line, err| panic!("unexpected error at line {line}: {err}")),
    };
    service.run().unwrap();

    let output = from_utf8(&output).unwrap();
    assert_eq!(output, "account,balance\n1,1000.00\n2,500.00\n\n");
}
