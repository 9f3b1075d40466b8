use scpu::Host;
use std::io::{self, Read, Write};

/// [`Host`](../scpu/trait.Host.html) implementation over the real standard
/// streams. Output is flushed after every byte so program output appears
/// immediately even without a trailing newline.
pub struct StdHost {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdHost {
    pub fn new() -> StdHost {
        StdHost {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Host for StdHost {
    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.stdin.read(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buf[0]),
        }
    }

    fn write_byte(&mut self, byte: u8) {
        // Output failures are not surfaced to the running program.
        let _ = self.stdout.write_all(&[byte]);
        let _ = self.stdout.flush();
    }
}
