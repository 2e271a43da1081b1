//! Command handlers - thin wrappers over the ops verbs.
//!
//! A declined confirmation is a normal exit, not an error; everything else
//! bubbles up through anyhow and a non-zero exit code.

use crate::context::AppContext;
use crate::render;
use crate::SearchField;
use anyhow::Result;
use flatbank_core::Account;
use flatbank_ops::{self as ops, NewAccount, OpsError};
use flatbank_store::{AccountStore, FilteredScan, Scan};
use rust_decimal::Decimal;

pub fn create(
    ctx: &mut AppContext,
    first_name: String,
    last_name: String,
    address: String,
    pesel: String,
    balance: Decimal,
    debt: Decimal,
) -> Result<()> {
    let new = NewAccount {
        first_name,
        last_name,
        address,
        pesel_number: pesel,
        balance,
        debt,
    };
    let mut confirm = ctx.confirmation();
    match ops::create(&ctx.store, &mut ctx.numbers, new, &mut confirm) {
        Ok(account) => {
            println!(
                "✅ Created account {} (number {})",
                account.id, account.account_number
            );
            Ok(())
        }
        Err(err) => finish(err),
    }
}

pub fn deposit(ctx: &mut AppContext, id: u32, amount: Decimal) -> Result<()> {
    let mut confirm = ctx.confirmation();
    match ops::deposit(&ctx.store, id, amount, &mut confirm) {
        Ok(account) => {
            println!("✅ Deposited {} into account {} (balance {})", amount, id, account.balance);
            Ok(())
        }
        Err(err) => finish(err),
    }
}

pub fn withdraw(ctx: &mut AppContext, id: u32, amount: Decimal) -> Result<()> {
    let mut confirm = ctx.confirmation();
    match ops::withdraw(&ctx.store, id, amount, &mut confirm) {
        Ok(account) => {
            println!("✅ Withdrew {} from account {} (balance {})", amount, id, account.balance);
            Ok(())
        }
        Err(err) => finish(err),
    }
}

pub fn transfer(ctx: &mut AppContext, from: u32, to: u32, amount: Decimal) -> Result<()> {
    let mut confirm = ctx.confirmation();
    match ops::transfer(&ctx.store, from, to, amount, &mut confirm) {
        Ok((source, destination)) => {
            println!(
                "✅ Transferred {} from account {} to account {} ({} / {})",
                amount, from, to, source.balance, destination.balance
            );
            Ok(())
        }
        Err(err) => finish(err),
    }
}

pub fn loan(ctx: &mut AppContext, id: u32, principal: Decimal, rate: Decimal) -> Result<()> {
    let mut confirm = ctx.confirmation();
    match ops::take_loan(&ctx.store, id, principal, rate, &mut confirm) {
        Ok(account) => {
            println!(
                "✅ Loan of {} granted to account {} (balance {}, debt {})",
                principal, id, account.balance, account.debt
            );
            Ok(())
        }
        Err(err) => finish(err),
    }
}

pub fn pay_debt(ctx: &mut AppContext, id: u32, amount: Decimal) -> Result<()> {
    let mut confirm = ctx.confirmation();
    match ops::pay_debt(&ctx.store, id, amount, &mut confirm) {
        Ok(account) => {
            println!(
                "✅ Paid {} of debt on account {} (balance {}, debt {})",
                amount, id, account.balance, account.debt
            );
            Ok(())
        }
        Err(err) => finish(err),
    }
}

pub fn list(ctx: &AppContext, json: bool) -> Result<()> {
    match ctx.store.scan()? {
        Scan::Absent => {
            println!("No accounts yet (store file not created)");
            Ok(())
        }
        Scan::Records(records) => {
            let accounts = records.collect::<Result<Vec<_>, _>>()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&accounts)?);
            } else {
                render::table(&accounts);
                println!("{} account(s)", accounts.len());
            }
            Ok(())
        }
    }
}

pub fn search(ctx: &AppContext, field: SearchField, key: &str) -> Result<()> {
    match ctx
        .store
        .scan_where(|account| field_matches(field, account, key))?
    {
        FilteredScan::Absent => {
            println!("No accounts yet (store file not created)");
            Ok(())
        }
        FilteredScan::Records(records) => {
            let matches = records.collect::<Result<Vec<_>, _>>()?;
            if matches.is_empty() {
                println!("No accounts match the search criteria");
            } else {
                render::table(&matches);
                println!("{} match(es)", matches.len());
            }
            Ok(())
        }
    }
}

fn field_matches(field: SearchField, account: &Account, key: &str) -> bool {
    match field {
        SearchField::Account => account.account_number.contains(key),
        SearchField::Name => account.first_name.contains(key),
        SearchField::Surname => account.last_name.contains(key),
        SearchField::Address => account.address.contains(key),
        SearchField::Pesel => account.pesel_number.contains(key),
    }
}

/// Map a declined confirmation to a quiet, successful exit; let real
/// failures propagate with their message.
fn finish(err: OpsError) -> Result<()> {
    match err {
        OpsError::Aborted => {
            println!("Operation aborted");
            Ok(())
        }
        other => Err(other.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Account {
        Account {
            id: 1,
            account_number: "83920174".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Nowak".to_string(),
            address: "ul. Dluga 12/3, Krakow".to_string(),
            pesel_number: "85042367891".to_string(),
            balance: dec!(10.00),
            debt: dec!(0.00),
        }
    }

    #[test]
    fn search_matches_substrings_per_field() {
        let account = sample();
        assert!(field_matches(SearchField::Account, &account, "3920"));
        assert!(field_matches(SearchField::Name, &account, "Mar"));
        assert!(field_matches(SearchField::Surname, &account, "Nowak"));
        assert!(field_matches(SearchField::Address, &account, "Krakow"));
        assert!(field_matches(SearchField::Pesel, &account, "85042"));
        assert!(!field_matches(SearchField::Name, &account, "Zofia"));
    }
}
