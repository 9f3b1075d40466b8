#[macro_use]
extern crate clap;

mod debug;
mod host;

use clap::{AppSettings, Arg, SubCommand};
use scpu::{constants, Processor};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
enum IOErrorContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
enum Error {
    Asm(sasm::Error),
    Load(scpu::Error),
    Trap(scpu::Trap),
    Io(std::io::Error, IOErrorContext, PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, path) => write!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IOErrorContext::ReadInput => "Reading input",
                    IOErrorContext::WriteOutput => "Writing output",
                },
                path.display(),
                err
            ),
            Error::Asm(err) => {
                writeln!(f, "Assembly failed:")?;
                write!(f, "{}", err)
            }
            Error::Load(err) => write!(f, "{}", err),
            Error::Trap(trap) => write!(f, "Execution trapped: {}", trap),
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("assemble")
                .about("Assemble a program")
                .arg(Arg::with_name("INPUT").required(true).index(1))
                .arg(Arg::with_name("OUTPUT").required(true).index(2)),
        )
        .subcommand(
            SubCommand::with_name("run")
                .about("Run a binary program")
                .arg(Arg::with_name("PROGRAM").required(true).index(1)),
        )
        .subcommand(
            SubCommand::with_name("debug")
                .about("Run a binary program with debug output")
                .arg(Arg::with_name("PROGRAM").required(true).index(1)),
        )
        .subcommand(
            SubCommand::with_name("trace")
                .about("Step a binary program with per-cycle state")
                .arg(Arg::with_name("PROGRAM").required(true).index(1)),
        )
        .subcommand(
            SubCommand::with_name("asm-run")
                .about("Assemble and run")
                .arg(Arg::with_name("INPUT").required(true).index(1)),
        )
        .subcommand(
            SubCommand::with_name("asm-debug")
                .about("Assemble and run with debug output")
                .arg(Arg::with_name("INPUT").required(true).index(1)),
        )
        .get_matches();

    let result = match matches.subcommand() {
        ("assemble", Some(sub)) => cmd_assemble(
            Path::new(sub.value_of("INPUT").unwrap()),
            Path::new(sub.value_of("OUTPUT").unwrap()),
        ),
        ("run", Some(sub)) => cmd_run(Path::new(sub.value_of("PROGRAM").unwrap()), false),
        ("debug", Some(sub)) => cmd_run(Path::new(sub.value_of("PROGRAM").unwrap()), true),
        ("trace", Some(sub)) => cmd_trace(Path::new(sub.value_of("PROGRAM").unwrap())),
        ("asm-run", Some(sub)) => cmd_asm_run(Path::new(sub.value_of("INPUT").unwrap()), false),
        ("asm-debug", Some(sub)) => cmd_asm_run(Path::new(sub.value_of("INPUT").unwrap()), true),
        _ => unreachable!(),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn read_source(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, path.to_owned()))
}

fn read_image(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|err| Error::Io(err, IOErrorContext::ReadInput, path.to_owned()))
}

fn assemble_source(path: &Path) -> Result<Vec<u8>, Error> {
    let source = read_source(path)?;
    println!("Assembling {}...", path.display());
    sasm::assemble(&source).map_err(|err| {
        Error::Asm(match path.to_str() {
            Some(path_str) => err.with_path(path_str),
            None => err,
        })
    })
}

fn load_processor(image: &[u8]) -> Result<Processor, Error> {
    let mut processor = Processor::new();
    processor.load_image(image).map_err(Error::Load)?;
    Ok(processor)
}

fn cmd_assemble(input: &Path, output: &Path) -> Result<(), Error> {
    let image = assemble_source(input)?;

    fs::write(output, &image)
        .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, output.to_owned()))?;

    println!("Assembled {} bytes to {}", image.len(), output.display());
    Ok(())
}

fn cmd_run(program: &Path, debug: bool) -> Result<(), Error> {
    let image = read_image(program)?;
    let mut processor = load_processor(&image)?;
    execute(&mut processor, image.len(), debug)
}

fn cmd_asm_run(input: &Path, debug: bool) -> Result<(), Error> {
    let image = assemble_source(input)?;
    println!("Assembled {} bytes\n", image.len());

    let mut processor = load_processor(&image)?;
    execute(&mut processor, image.len(), debug)
}

fn execute(processor: &mut Processor, image_size: usize, debug: bool) -> Result<(), Error> {
    if debug {
        println!("=== Starting Execution (Debug Mode) ===");
        println!(
            "Program loaded at {:#06X}, size: {} bytes\n",
            constants::LOAD_ADDRESS,
            image_size
        );
        debug::print_registers(processor);
        println!();
    }

    println!("=== Program Output ===");
    let mut host = host::StdHost::new();
    let result = processor.run(&mut host);
    println!("\n=== End Output ===\n");

    if debug {
        debug::print_registers(processor);
        debug::print_stack(processor);
        println!("Program image:");
        debug::print_memory(processor, constants::LOAD_ADDRESS, image_size.min(64) as u16);
        println!("Program terminated after {} cycles", processor.cycles());
    }

    result.map_err(Error::Trap)
}

fn cmd_trace(program: &Path) -> Result<(), Error> {
    let image = read_image(program)?;
    let mut processor = load_processor(&image)?;
    let mut host = host::StdHost::new();

    println!("=== Execution Trace ===");
    let mut result = Ok(());
    while !processor.halted() {
        debug::print_trace_line(&processor);
        if let Err(trap) = processor.step(&mut host) {
            result = Err(Error::Trap(trap));
            break;
        }
    }
    println!("=== End Trace ===");
    println!("Total cycles: {}", processor.cycles());

    result
}
