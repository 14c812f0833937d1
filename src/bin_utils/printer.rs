use std::io::Write;

use crate::{account::Account, ledger::Ledger};

const ACCOUNT_SEPARATOR: &str = "----------------------------------------";

pub fn print_menu<W>(output: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    write!(
        output,
        "\n\
         ============== MENU ==============\n\
         [d]\tDeposit\n\
         [s]\tWithdraw\n\
         [e]\tStatement\n\
         [nu]\tNew user\n\
         [nc]\tNew account\n\
         [lc]\tList accounts\n\
         [q]\tQuit\n\
         => "
    )?;
    output.flush()?;
    Ok(())
}

/// Renders every recorded movement followed by the current balance.
pub fn print_statement<W>(output: &mut W, ledger: &Ledger) -> anyhow::Result<()>
where
    W: Write,
{
    writeln!(output, "\n============== STATEMENT ==============")?;
    if ledger.statement_log().is_empty() {
        writeln!(output, "No transactions have been made.")?;
    } else {
        for line in ledger.statement_log() {
            writeln!(output, "{line}")?;
        }
    }
    writeln!(output, "\nBalance: {:.2}", ledger.balance())?;
    writeln!(output, "=======================================")?;
    Ok(())
}

pub fn print_accounts<W>(output: &mut W, accounts: &[Account]) -> anyhow::Result<()>
where
    W: Write,
{
    if accounts.is_empty() {
        writeln!(output, "\nNo accounts registered.")?;
        return Ok(());
    }
    writeln!(output, "\n============== ACCOUNTS ==============")?;
    for acc in accounts {
        writeln!(output, "{ACCOUNT_SEPARATOR}")?;
        writeln!(output, "Branch:\t\t{}", acc.branch_code)?;
        writeln!(output, "Account:\t{}", acc.account_number)?;
        writeln!(output, "Holder:\t\t{}", acc.owner.full_name)?;
    }
    writeln!(output, "======================================")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::from_utf8;

    use rust_decimal_macros::dec;

    use crate::user::User;

    use super::*;

    #[test]
    fn empty_statement() {
        let mut output = Vec::new();
        print_statement(&mut output, &Ledger::default()).unwrap();
        let text = from_utf8(&output).unwrap();
        assert!(text.contains("No transactions have been made."));
        assert!(text.contains("Balance: 0.00"));
    }

    #[test]
    fn statement_lists_movements_in_order() {
        let mut ledger = Ledger::default();
        ledger.deposit(dec!(150)).unwrap();
        ledger.deposit(dec!(0.5)).unwrap();
        let mut output = Vec::new();
        print_statement(&mut output, &ledger).unwrap();
        let text = from_utf8(&output).unwrap();
        let first = text.find("Deposit: 150.00").unwrap();
        let second = text.find("Deposit: 0.50").unwrap();
        assert!(first < second);
        assert!(text.contains("Balance: 150.50"));
    }

    #[test]
    fn no_accounts_notice() {
        let mut output = Vec::new();
        print_accounts(&mut output, &[]).unwrap();
        assert_eq!(from_utf8(&output).unwrap(), "\nNo accounts registered.\n");
    }

    #[test]
    fn account_listing() {
        let accounts = vec![Account {
            branch_code: "0001".to_string(),
            account_number: 7,
            owner: User {
                full_name: "Katherine Johnson".to_string(),
                birth_date: "26-08-1918".to_string(),
                national_id: "1".to_string(),
                address: "Hampton".to_string(),
            },
        }];
        let mut output = Vec::new();
        print_accounts(&mut output, &accounts).unwrap();
        let text = from_utf8(&output).unwrap();
        assert!(text.contains("Branch:\t\t0001"));
        assert!(text.contains("Account:\t7"));
        assert!(text.contains("Holder:\t\tKatherine Johnson"));
    }
}
