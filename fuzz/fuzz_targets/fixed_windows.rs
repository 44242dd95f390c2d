#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use seam_window::FixedWindows;

#[derive(Arbitrary, Debug)]
struct WindowInput {
    elements: Vec<i64>,
    arity: u8,
}

fuzz_target!(|input: WindowInput| {
    let arity = (input.arity % 6) as usize;

    match FixedWindows::new(input.elements.clone().into_iter(), arity) {
        Err(_) => assert_eq!(arity, 0, "valid arity rejected"),
        Ok(windows) => {
            let collected: Vec<_> = windows.collect();
            assert_eq!(collected.len(), input.elements.len());

            for (idx, window) in collected.iter().enumerate() {
                assert_eq!(window.arity(), arity);
                assert_eq!(window.get(0), Some(&input.elements[idx]));
                for offset in 1..arity {
                    assert_eq!(window.get(offset), input.elements.get(idx + offset));
                }
            }
        }
    }
});
