//! Interactive menu loop
//!
//! Thin I/O glue over the core: collects an operation code and raw inputs,
//! resolves the target account, invokes the transaction engine, and prints
//! rendered results. All parsing of raw text happens here; the core only
//! ever sees already-parsed values.
//!
//! The loop is generic over `BufRead`/`Write` so tests can drive complete
//! sessions from scripted input and capture the output.

use crate::core::{
    identifier, statement, AccountRegistry, TransactionEngine, UserRegistry, WithdrawalPolicy,
};
use crate::types::User;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Menu text shown before every prompt
pub const MENU: &str = "\
=============== MENU ================
[d]  Deposit
[s]  Withdraw
[e]  Statement
[nc] Open account
[lc] List accounts
[nu] Register user
[lu] List users
[q]  Quit
=> ";

/// Run an interactive session until `q` or end of input
///
/// Owns the registries and the engine for the duration of the session;
/// nothing survives the call (no persistence).
///
/// # Arguments
///
/// * `input` - Command and prompt-answer source (stdin in production)
/// * `output` - Destination for menus, prompts, and results
/// * `branch_code` - Branch code for newly opened accounts
/// * `policy` - Withdrawal limits enforced by the engine
///
/// # Errors
///
/// Only I/O errors on the streams are returned; every rejected ledger
/// operation is reported as a message and the loop continues.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    branch_code: &str,
    policy: WithdrawalPolicy,
) -> io::Result<()> {
    let mut users = UserRegistry::new();
    let mut accounts = AccountRegistry::new();
    let engine = TransactionEngine::new(policy);

    writeln!(output, "Welcome to the banking ledger!")?;

    loop {
        write!(output, "\n{}", MENU)?;
        output.flush()?;

        let Some(option) = read_line(&mut input)? else {
            break;
        };

        match option.as_str() {
            "d" => deposit(&mut input, &mut output, &mut accounts, &engine)?,
            "s" => withdraw(&mut input, &mut output, &mut accounts, &engine)?,
            "e" => show_statement(&mut input, &mut output, &accounts)?,
            "nc" => open_account(&mut input, &mut output, branch_code, &users, &mut accounts)?,
            "lc" => write!(output, "{}", statement::render_account_list(accounts.list_all()))?,
            "nu" => register_user(&mut input, &mut output, &mut users)?,
            "lu" => write!(output, "{}", statement::render_user_list(users.all()))?,
            "q" => break,
            "" => continue,
            other => writeln!(output, "Invalid option: {}", other)?,
        }
    }

    info!("session ended");
    Ok(())
}

/// Read one trimmed line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    read_line(input)
}

/// Prompt for an identifier and reject it before any registry access
///
/// A malformed identifier short-circuits the whole action; no lookup or
/// mutation may run with one.
fn prompt_identifier<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    let Some(identifier_text) = prompt(input, output, "Identifier (11 digits): ")? else {
        return Ok(None);
    };
    if !identifier::validate(&identifier_text) {
        writeln!(
            output,
            "Invalid identifier: it must contain exactly 11 digits."
        )?;
        return Ok(None);
    }
    Ok(Some(identifier_text))
}

fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Decimal>> {
    let Some(raw) = prompt(input, output, "Amount: ")? else {
        return Ok(None);
    };
    match raw.parse::<Decimal>() {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            writeln!(output, "Could not parse amount: {}", raw)?;
            Ok(None)
        }
    }
}

fn deposit<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    accounts: &mut AccountRegistry,
    engine: &TransactionEngine,
) -> io::Result<()> {
    let Some(identifier_text) = prompt_identifier(input, output)? else {
        return Ok(());
    };
    let Some(amount) = prompt_amount(input, output)? else {
        return Ok(());
    };
    let Some(account) = accounts.find_by_owner_identifier_mut(&identifier_text) else {
        writeln!(output, "Account not found. Open an account first.")?;
        return Ok(());
    };

    match engine.deposit(account, amount) {
        Ok(()) => writeln!(output, "Deposit of $ {:.2} applied.", amount),
        Err(error) => {
            warn!(%error, "deposit rejected");
            writeln!(output, "Operation failed: {}", error)
        }
    }
}

fn withdraw<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    accounts: &mut AccountRegistry,
    engine: &TransactionEngine,
) -> io::Result<()> {
    let Some(identifier_text) = prompt_identifier(input, output)? else {
        return Ok(());
    };
    let Some(amount) = prompt_amount(input, output)? else {
        return Ok(());
    };
    let Some(account) = accounts.find_by_owner_identifier_mut(&identifier_text) else {
        writeln!(output, "Account not found. Open an account first.")?;
        return Ok(());
    };

    match engine.withdraw(account, amount) {
        Ok(()) => writeln!(output, "Withdrawal of $ {:.2} applied.", amount),
        Err(error) => {
            warn!(%error, "withdrawal rejected");
            writeln!(output, "Operation failed: {}", error)
        }
    }
}

fn show_statement<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    accounts: &AccountRegistry,
) -> io::Result<()> {
    let Some(identifier_text) = prompt_identifier(input, output)? else {
        return Ok(());
    };
    match accounts.find_by_owner_identifier(&identifier_text) {
        Some(account) => write!(output, "{}", statement::render(account)),
        None => writeln!(output, "Account not found. Open an account first."),
    }
}

fn open_account<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    branch_code: &str,
    users: &UserRegistry,
    accounts: &mut AccountRegistry,
) -> io::Result<()> {
    let Some(identifier_text) = prompt_identifier(input, output)? else {
        return Ok(());
    };
    match accounts.open_account(branch_code, &identifier_text, users) {
        Ok(account) => writeln!(
            output,
            "Account {} opened at branch {}.",
            account.number, account.branch_code
        ),
        Err(error) => {
            warn!(%error, "account opening rejected");
            writeln!(output, "Operation failed: {}", error)
        }
    }
}

fn register_user<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    users: &mut UserRegistry,
) -> io::Result<()> {
    let Some(identifier_text) = prompt_identifier(input, output)? else {
        return Ok(());
    };
    let Some(full_name) = prompt(input, output, "Full name: ")? else {
        return Ok(());
    };
    let Some(date_of_birth) = prompt(input, output, "Date of birth (dd-mm-yyyy): ")? else {
        return Ok(());
    };
    let Some(address) = prompt(input, output, "Address: ")? else {
        return Ok(());
    };

    let candidate = User::new(full_name, date_of_birth, identifier_text, address);
    match users.register(candidate) {
        Ok(user) => writeln!(output, "User {} registered.", user.identifier),
        Err(error) => {
            warn!(%error, "registration rejected");
            writeln!(output, "Operation failed: {}", error)
        }
    }
}
