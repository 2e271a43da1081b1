//! Table rendering for account listings, kept close to the classic layout.

use flatbank_core::Account;

const LINE_LENGTH: usize = 120;

pub fn table(accounts: &[Account]) {
    line();
    header();
    line();
    for account in accounts {
        row(account);
    }
    line();
}

pub fn header() {
    println!(
        "| {:>4} | {:<8} | {:<15} | {:<15} | {:<30} | {:<11} | {:>10} | {:>10} |",
        "ID", "Number", "First Name", "Last Name", "Address", "PESEL", "Balance", "Debt"
    );
}

pub fn row(account: &Account) {
    println!(
        "| {:>4} | {:<8} | {:<15} | {:<15} | {:<30} | {:<11} | {:>10.2} | {:>10.2} |",
        account.id,
        account.account_number,
        account.first_name,
        account.last_name,
        account.address,
        account.pesel_number,
        account.balance,
        account.debt
    );
}

pub fn line() {
    println!("{}", "-".repeat(LINE_LENGTH));
}
