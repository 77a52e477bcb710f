#![no_main]

use imgprobe::{decode, Outcome};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Outcome::Found(info) = decode("fuzz", data) else {
        return;
    };
    assert!(info.bytes_examined <= data.len());

    // Bytes past the examined prefix never change the answer.
    let minimum = info.format.minimum_sample().map_or(0, |m| m + 1);
    let cut = info.bytes_examined.max(minimum);
    assert_eq!(decode("fuzz", &data[..cut]), Outcome::Found(info));
});
