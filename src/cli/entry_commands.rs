use std::io::{self, BufRead, Write};

use crate::cli::context::CLIContext;
use crate::cli::input;
use crate::clock::Clock;
use crate::directory::Directory;
use crate::error::DirectoryResult;
use crate::model::MonthDay;
use crate::validation;

pub fn add<R: BufRead, W: Write, C: Clock>(ctx: &mut CLIContext<R, W, C>) -> io::Result<()> {
    let name = match ctx.read_line("Enter name: ")? {
        Some(s) => s,
        None => return Ok(()),
    };
    if let Err(e) = validation::valid_name(&name) {
        return ctx.print_error(&e);
    }

    let phone = match ctx.prompt("Enter phone number: ")? {
        Some(s) => s,
        None => return Ok(()),
    };
    let phone = match input::parse_phone_number(&phone) {
        Ok(n) => n,
        Err(e) => return ctx.print_error(&e),
    };

    let birthday = match ctx.prompt("Enter birthday (MM/DD): ")? {
        Some(s) => s,
        None => return Ok(()),
    };
    let birthday = match input::parse_month_day(&birthday) {
        Ok(md) => md,
        Err(e) => return ctx.print_error(&e),
    };

    match apply_add(&mut ctx.directory, &name, phone, birthday) {
        Ok(()) => Ok(()),
        Err(e) => ctx.print_error(&e),
    }
}

fn apply_add<C: Clock>(
    directory: &mut Directory<C>,
    name: &str,
    phone: u64,
    birthday: MonthDay,
) -> DirectoryResult<()> {
    directory.add_entry(name)?;
    directory.set_phone_number(name, phone)?;
    directory.set_birthday(name, birthday.month(), birthday.day())
}

pub fn remove<R: BufRead, W: Write, C: Clock>(ctx: &mut CLIContext<R, W, C>) -> io::Result<()> {
    if let Some(name) = ctx.read_line("Enter name: ")? {
        ctx.directory.remove_entry(&name);
    }
    Ok(())
}

pub fn list<R: BufRead, W: Write, C: Clock>(ctx: &mut CLIContext<R, W, C>) -> io::Result<()> {
    for (name, entry) in ctx.directory.list_entries() {
        let phone = entry
            .phone_number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "(none)".into());
        let birthday = entry
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(none)".into());
        writeln!(ctx.output, "{} {} {}", name, phone, birthday)?;
    }
    Ok(())
}

pub fn next_birthday<R: BufRead, W: Write, C: Clock>(
    ctx: &mut CLIContext<R, W, C>,
) -> io::Result<()> {
    match ctx.directory.next_birthday_entry() {
        Ok((name, birthday)) => writeln!(ctx.output, "{}'s birthday is on {}", name, birthday),
        Err(e) => ctx.print_error(&e),
    }
}
