//! `tidyt tuesday`: print the Tuesday of a week.

use chrono::Local;
use std::process;
use tidytemplate_core::dates::ISO_DATE;
use tidytemplate_core::weekly::{Reference, resolve_reference, tuesday_for};

use crate::TuesdayArgs;

pub fn run(args: &TuesdayArgs) {
    let today = Local::now().date_naive();
    let reference = args.date.clone().map(Reference::Expr);

    match resolve_reference(reference.as_ref(), today).and_then(tuesday_for) {
        Ok(tuesday) => println!("{}", tuesday.format(ISO_DATE)),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
