/// The host I/O boundary of the machine.
///
/// The emulator reaches the outside world only through this pair of
/// byte-oriented capabilities, injected into
/// [`Processor::step`](struct.Processor.html#method.step) and
/// [`Processor::run`](struct.Processor.html#method.run) by reference.
pub trait Host {
    /// Reads one byte from the host input source.
    ///
    /// `None` signals end of input; the machine surfaces it to the program
    /// as the byte `0x00`.
    fn read_byte(&mut self) -> Option<u8>;

    /// Sends one byte to the host output sink.
    fn write_byte(&mut self, byte: u8);
}

/// An in-memory [`Host`](trait.Host.html) backed by byte buffers.
///
/// Useful for tests and for embedding the emulator without touching real
/// standard streams.
#[derive(Default)]
pub struct BufferHost {
    input: Vec<u8>,
    cursor: usize,
    output: Vec<u8>,
}

impl BufferHost {
    pub fn new() -> BufferHost {
        Default::default()
    }

    pub fn with_input(input: &[u8]) -> BufferHost {
        BufferHost {
            input: Vec::from(input),
            cursor: 0,
            output: Vec::new(),
        }
    }

    /// Everything the program has written so far.
    pub fn output(&self) -> &[u8] {
        &self.output[..]
    }
}

impl Host for BufferHost {
    fn read_byte(&mut self) -> Option<u8> {
        let byte = self.input.get(self.cursor).copied();
        if byte.is_some() {
            self.cursor += 1;
        }
        byte
    }

    fn write_byte(&mut self, byte: u8) {
        self.output.push(byte);
    }
}
