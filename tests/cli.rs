/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of basetext.
 *
 * basetext is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * basetext is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with basetext. If not, see <https://www.gnu.org/licenses/>.
 */

#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_basetext"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("could not start basetext");
    // Refused invocations exit before reading, so the write may fail.
    let _ = child.stdin.take().expect("stdin is piped").write_all(input);
    child.wait_with_output().expect("basetext did not finish")
}

#[test]
fn base91_round_trips_through_stdin() {
    let encoded = run(&[], b"Hello, World!");
    assert!(encoded.status.success());
    assert_eq!(encoded.stdout, b">OwJh>}AQ;r@@Y?F");

    let decoded = run(&["-d", "-"], &encoded.stdout);
    assert!(decoded.status.success());
    assert_eq!(decoded.stdout, b"Hello, World!");
}

#[test]
fn hex_output_has_no_trailing_newline() {
    let output = run(&["-c", "hex"], &[0x00, 0xff, 0x1a]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"00FF1A");

    let output = run(&["-d", "-c", "hex"], b"00ff1a\n");
    assert!(output.status.success());
    assert_eq!(output.stdout, [0x00_u8, 0xff, 0x1a]);
}

#[test]
fn wrapped_base91_decodes() {
    let encoded = run(&["-w", "4"], b"Hello, World!");
    assert!(encoded.status.success());
    assert_eq!(encoded.stdout, b">OwJ\nh>}A\nQ;r@\n@Y?F");
    let decoded = run(&["-d"], &encoded.stdout);
    assert_eq!(decoded.stdout, b"Hello, World!");
}

#[test]
fn refused_options_exit_with_failure() {
    let output = run(&["--wrap", "4", "-c", "hex"], b"data");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let output = run(&["--lower"], b"data");
    assert!(!output.status.success());
}

#[test]
fn bad_hex_exits_with_failure() {
    let output = run(&["-d", "-c", "hex"], b"abc");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let output = run(&["-c", "hex"], b"");
    assert!(!output.status.success());
}
