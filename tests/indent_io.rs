// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use describable::{IndentOptions, IndentWriter, LineStart, indent::nested};
#[cfg(test)]
use pretty_assertions::assert_eq;

fn to_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

/// Accepts at most `capacity` bytes per call to `write`.
struct Trickle {
    capacity: usize,
    out: Vec<u8>,
}

impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let len = buf.len().min(self.capacity);
        self.out.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fails every write, and counts how often it was tried.
#[derive(Default)]
struct Broken {
    attempts: usize,
    flushes: usize,
}

impl Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        self.attempts += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[test]
fn test_begin_hello_world_end() -> io::Result<()> {
    let mut out = Vec::new();
    let mut w = IndentWriter::new(&mut out, 2);
    w.write_all(b"begin\nhello\nworld\nend\n")?;
    assert!(w.is_at_line_start());
    assert_eq!(to_string(out), "begin\n  hello\n  world\n  end\n");
    Ok(())
}

#[test]
fn test_single_line_gets_one_indent_when_fresh() -> io::Result<()> {
    let mut out = Vec::new();
    let mut w = IndentWriter::fresh(&mut out, 3);
    w.write_all(b"no line break ")?;
    w.write_all(b"in here")?;
    assert_eq!(to_string(out), "   no line break in here");
    Ok(())
}

#[test]
fn test_single_line_untouched_when_continuing() -> io::Result<()> {
    let mut out = Vec::new();
    let mut w = IndentWriter::new(&mut out, 3);
    w.write_all(b"no line break")?;
    assert_eq!(to_string(out), "no line break");
    Ok(())
}

#[test]
fn test_empty_input_forwards_nothing() -> io::Result<()> {
    let mut out = Vec::new();
    let mut w = IndentWriter::fresh(&mut out, 4);
    assert_eq!(w.write(b"")?, 0);
    w.write_all(b"")?;
    w.flush()?;
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn test_empty_lines_stay_empty() -> io::Result<()> {
    let mut out = Vec::new();
    let mut w = IndentWriter::fresh(&mut out, 2);
    w.write_all(b"\n\na\n\n\nb")?;
    assert_eq!(to_string(out), "\n\n  a\n\n\n  b");
    Ok(())
}

#[test]
fn test_byte_at_a_time_equals_bulk() -> io::Result<()> {
    let text = b"first\n\n  second\nthird";

    let mut bulk = Vec::new();
    IndentWriter::fresh(&mut bulk, 2).write_all(text)?;

    let mut trickled = Vec::new();
    {
        let mut w = IndentWriter::fresh(&mut trickled, 2);
        for byte in text {
            w.write_all(std::slice::from_ref(byte))?;
        }
    }

    assert_eq!(to_string(trickled), to_string(bulk));
    Ok(())
}

#[test]
fn test_short_writes_of_destination() -> io::Result<()> {
    let mut dest = Trickle {
        capacity: 2,
        out: Vec::new(),
    };
    let mut w = IndentWriter::new(&mut dest, 4);
    w.write_all(b"ab\ncde\n\nf")?;
    assert_eq!(to_string(dest.out), "ab\n    cde\n\n    f");
    Ok(())
}

#[test]
fn test_write_handles_one_line_per_call() -> io::Result<()> {
    let mut out = Vec::new();
    let mut w = IndentWriter::fresh(&mut out, 1);
    assert_eq!(w.write(b"ab\ncd")?, 3);
    assert!(w.is_at_line_start());
    assert_eq!(w.write(b"cd")?, 2);
    assert!(!w.is_at_line_start());
    assert_eq!(to_string(out), " ab\n cd");
    Ok(())
}

#[test]
fn test_nested_example() -> io::Result<()> {
    let mut out = Vec::new();
    out.write_all(b"begin1\nhello\nworld\nend1\n")?;
    let mut os1 = IndentWriter::new(&mut out, 2);
    os1.write_all(b"begin2\nhello\nworld\nend2\n")?;
    let mut os2 = IndentWriter::new(&mut os1, 2);
    os2.write_all(b"begin3\nhello\nworld\nend3\n")?;

    assert_eq!(
        to_string(out),
        "begin1\n\
         hello\n\
         world\n\
         end1\n\
         begin2\n  \
         hello\n  \
         world\n  \
         end2\n  \
         begin3\n    \
         hello\n    \
         world\n    \
         end3\n"
    );
    Ok(())
}

#[test]
fn test_nesting_adds_up() -> io::Result<()> {
    for levels in 0..5 {
        for width in [0, 1, 3] {
            let mut out = Vec::new();
            {
                let options = IndentOptions::new(width).with_line_start(LineStart::Fresh);
                let mut w = nested(&mut out, levels, &options);
                w.write_all(b"hello\nworld\n\n")?;
            }
            let indent = " ".repeat(levels * width);
            assert_eq!(to_string(out), format!("{indent}hello\n{indent}world\n\n"));
        }
    }
    Ok(())
}

#[test]
fn test_outer_prefix_comes_first() -> io::Result<()> {
    let mut out = Vec::new();
    let mut outer = IndentWriter::with_options(
        &mut out,
        &IndentOptions::new(1)
            .with_fill('o')
            .with_line_start(LineStart::Fresh),
    );
    let mut inner = IndentWriter::with_options(
        &mut outer,
        &IndentOptions::new(2)
            .with_fill('i')
            .with_line_start(LineStart::Fresh),
    );
    inner.write_all(b"x\ny")?;
    assert_eq!(to_string(out), "oiix\noiiy");
    Ok(())
}

#[test]
fn test_independent_writers_produce_identical_output() -> io::Result<()> {
    let text = b"a\n\nb\n c";
    let mut first = Vec::new();
    let mut second = Vec::new();
    IndentWriter::new(&mut first, 2).write_all(text)?;
    IndentWriter::new(&mut second, 2).write_all(text)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_failure_propagates_without_further_writes() {
    let mut dest = Broken::default();
    let mut w = IndentWriter::fresh(&mut dest, 2);
    let err = w.write_all(b"abc\ndef\n").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(dest.attempts, 1);
}

#[test]
fn test_failure_of_content_write_propagates() {
    let mut dest = Broken::default();
    let mut w = IndentWriter::new(&mut dest, 2);
    let err = w.write(b"abc").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(dest.attempts, 1);
}

#[test]
fn test_flush_is_forwarded() -> io::Result<()> {
    let mut dest = Broken::default();
    IndentWriter::new(&mut dest, 2).flush()?;
    assert_eq!(dest.flushes, 1);
    Ok(())
}

#[test]
fn test_into_inner_returns_destination() -> io::Result<()> {
    let mut w = IndentWriter::new(Vec::new(), 2);
    w.write_all(b"a\nb")?;
    assert_eq!(w.indent(), "  ");
    assert_eq!(w.get_ref().len(), 5);
    assert_eq!(to_string(w.into_inner()), "a\n  b");
    Ok(())
}
