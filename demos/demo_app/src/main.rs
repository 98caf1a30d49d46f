mod cmd_impl;

use std::io::{self, BufRead, Write};

use engine_core::Dispatcher;
use engine_macros::define_signatures;

define_signatures! {
    mod commands;
    r#"
    v       : crate::cmd_impl::void,
    B       : crate::cmd_impl::cat_byte,
    s       : crate::cmd_impl::cat_string,
    hB      : crate::cmd_impl::cat_bytes,
    hhsshqD : crate::cmd_impl::cat_mixed,
    D       : crate::cmd_impl::set_speed,
    wt      : crate::cmd_impl::set_level,
    "#
}

fn main() {
    println!("Commands ({}):", commands::get_signatures_count());
    for (name, spec) in commands::get_command_specs() {
        println!("  {name:<12} {spec}");
    }
    println!("\nDescriptors:\n{}", commands::DESCRIPTOR_HELP);

    let mut dispatcher = Dispatcher::new(commands::get_signatures());
    let stdin = io::stdin();

    print!("> ");
    let _ = io::stdout().flush();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim() == "#q" {
            break;
        }
        if !dispatcher.dispatch(&line) {
            println!("FAIL");
        }
        print!("> ");
        let _ = io::stdout().flush();
    }
}
