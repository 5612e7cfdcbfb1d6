#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate dnsname;

use dnsname::{decode_name, MessageBuffer, MAX_MESSAGE_SIZE, MAX_NAME_LEN};

fuzz_target!(|data: &[u8]| {
    let buf: MessageBuffer = match MessageBuffer::from_slice(data) {
        Ok(buf) => buf,
        Err(_) => return,
    };

    for offset in 0..=MAX_MESSAGE_SIZE {
        if let Ok((name, next)) = decode_name(&buf, offset) {
            assert!(next > offset && next <= MAX_MESSAGE_SIZE);
            assert!(name.encoded_len() <= MAX_NAME_LEN);
        }
    }
});
