//! CLI command implementations.
//!
//! Each `(resource, verb)` pair maps to one handler function. Handlers receive
//! the analysis service and the output stream explicitly.

pub mod class;
pub mod export;
pub mod import;
pub mod label;
pub mod namespace;
pub mod read;

#[cfg(test)]
pub mod mock;

use std::io::Write;

use anyhow::Result;
use gsk_core::AnalysisService;

use crate::cli::{
    ClassCommand, Command, ExportCommand, ImportCommand, LabelCommand, NamespaceCommand,
};

/// Run the handler for a parsed command
pub fn dispatch(
    command: &Command,
    service: &dyn AnalysisService,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Class(ClassCommand::List(args)) => class::list(service, args.limit, out),
        Command::Export(ExportCommand::List(args)) => {
            export::list(service, args.filter.as_deref(), args.limit, out)
        }
        Command::Import(ImportCommand::List(args)) => {
            import::list(service, args.filter.as_deref(), args.limit, out)
        }
        Command::Namespace(NamespaceCommand::List(args)) => {
            namespace::list(service, args.limit, out)
        }
        Command::Label(LabelCommand::List { address, limit }) => {
            label::list(service, address.as_deref(), *limit, out)
        }
        Command::Label(LabelCommand::Add {
            address,
            name,
            local,
            global,
        }) => label::add(service, address, name, *local && !*global, out),
        Command::Label(LabelCommand::Delete { address, name }) => {
            label::delete(service, address, name, out)
        }
        Command::Read(args) => {
            let length = read::resolve_length(args.length, args.length_arg.as_deref());
            read::run(service, &args.address, length, out)
        }
    }
}
