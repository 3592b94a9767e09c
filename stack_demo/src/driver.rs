use std::io::Write;

use anyhow::Context;
use stack_adt::{absent, StackLinkedList};

use crate::handlers::{LinePrinter, LoggingDestructor, SameText};

/// Rendering of a missing item or top.
const NULL: &str = "(null)";

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub items: Vec<String>,
    pub searches: Vec<String>,
    /// Items left on the stack for the destructor instead of being popped.
    pub keep: usize,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub found: usize,
    pub popped: Vec<String>,
    pub destroyed: usize,
}

fn flag(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

pub fn print_info<W: Write>(out: &mut W, stack: Option<&StackLinkedList<String>>) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(out, "printInfo()")?;
    writeln!(out, "stackEmpty(): {}", flag(absent::is_empty(stack)))?;
    writeln!(out, "stackCount(): {} items on stack", absent::count(stack))?;
    writeln!(out, "stackTop(): {}", absent::top(stack).map_or(NULL, String::as_str))?;
    writeln!(out, "stackPrint():")?;

    let mut printer = LinePrinter::new(out);
    absent::print(stack, &mut printer);
    printer.finish().context("printing stack contents")?;

    Ok(())
}

pub fn push_data(stack: Option<&mut StackLinkedList<String>>, data: &str) -> anyhow::Result<()> {
    let Some(stack) = stack else {
        log::warn!("no stack to push {data:?} onto");
        return Ok(());
    };
    // The stack gets its own copy of the text.
    stack
        .push(data.to_owned())
        .with_context(|| format!("pushing {data:?}"))?;

    Ok(())
}

pub fn pop_data<W: Write>(
    out: &mut W,
    stack: Option<&mut StackLinkedList<String>>,
) -> anyhow::Result<Option<String>> {
    let data = absent::pop(stack);
    writeln!(out, "Popped: {}", data.as_deref().unwrap_or(NULL))?;

    Ok(data)
}

pub fn search_data<W: Write>(
    out: &mut W,
    stack: Option<&StackLinkedList<String>>,
    data: &str,
) -> anyhow::Result<bool> {
    let found = absent::search(stack, data, &SameText);
    writeln!(
        out,
        "stackSearch: {} {} {}",
        data,
        flag(found.is_some()),
        found.map_or(NULL, String::as_str)
    )?;

    Ok(found.is_some())
}

pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();
    let mut stack = Some(StackLinkedList::new());

    print_info(out, stack.as_ref())?;

    for item in &config.items {
        push_data(stack.as_mut(), item)?;
    }

    print_info(out, stack.as_ref())?;

    for target in &config.searches {
        if search_data(out, stack.as_ref(), target)? {
            summary.found += 1;
        }
    }

    let pops = absent::count(stack.as_ref()).saturating_sub(config.keep);
    for _ in 0..pops {
        if let Some(item) = pop_data(out, stack.as_mut())? {
            summary.popped.push(item);
        }
    }

    let mut destructor = LoggingDestructor::default();
    if let Some(stack) = stack.take() {
        stack.destroy(&mut destructor);
    }
    summary.destroyed = destructor.destroyed;
    writeln!(out, "stackDestroy(): {} items destroyed", summary.destroyed)?;

    Ok(summary)
}
