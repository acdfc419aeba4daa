#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strpeek::{
    BuilderView, CursorView, InvalidUtf8, MemoryImage, MemoryReader, ReadError, StringView,
    Summary, SummaryOptions, summarize_builder, summarize_cursor, summarize_string,
};

#[derive(Debug, Arbitrary)]
struct Input {
    regions: Vec<(u64, Vec<u8>)>,
    value: u64,
    length: u64,
    position: u64,
    capacity: u64,
    preview_limit: u8,
    replace_invalid: bool,
}

/// Checks every request against the preview limit before forwarding it.
struct Bounded<'a> {
    image: &'a MemoryImage,
    limit: usize,
}

impl MemoryReader for Bounded<'_> {
    fn read_memory(&self, address: u64, length: usize) -> Result<Vec<u8>, ReadError> {
        assert!((1..=self.limit).contains(&length), "unbounded read of {length}");
        self.image.read_memory(address, length)
    }
}

fn check(summary: &Summary) {
    let text = summary.to_string();
    assert!(!text.contains(['\t', '\n', '\u{0B}', '\u{0C}', '\r']), "{text:?}");
}

fuzz_target!(|input: Input| {
    let mut image = MemoryImage::new();
    for (address, bytes) in input.regions {
        image.insert(address, bytes);
    }
    let options = SummaryOptions {
        preview_limit: usize::from(input.preview_limit),
        invalid_utf8: if input.replace_invalid {
            InvalidUtf8::Replace
        } else {
            InvalidUtf8::Drop
        },
    };
    let memory = Bounded {
        image: &image,
        limit: options.preview_limit.max(1),
    };

    let string = StringView {
        value: input.value,
        length: input.length,
    };
    check(&summarize_string(&string, &memory, &options));

    let builder = BuilderView {
        length: input.length,
        out_buffer: StringView {
            value: input.value,
            length: input.capacity,
        },
    };
    check(&summarize_builder(&builder, &memory, &options));

    let cursor = CursorView {
        position: input.position,
        source: string,
    };
    check(&summarize_cursor(&cursor, &memory, &options));
});
