use std::cell::{Cell, RefCell};

use wirebits::{
    trace::{Access, Event, LogTracer, TraceFn, Tracer},
    Codec, Error, FieldFlags, Layer, MessageWriter,
};

fn recording<W: Copy>(events: &RefCell<Vec<Event<W>>>) -> TraceFn<impl Fn(&Event<W>) + '_> {
    TraceFn(move |event: &Event<W>| events.borrow_mut().push(*event))
}

#[test]
fn straddling_write_merges_two_words() -> Result<(), Error> {
    let events = RefCell::new(Vec::<Event<u64>>::new());
    let codec = Codec::with_tracer(recording(&events));

    let mut message = [0u64; 2];
    let flags = FieldFlags::START_LOW | FieldFlags::ERASE;
    assert_eq!(codec.write_bits(&mut message, 60, 8, 0xff, flags)?, 68);

    assert_eq!(
        events.take(),
        [
            Event::Begin {
                layer: Layer::Word,
                access: Access::Write,
                start_bit: 60,
                bit_len: 8,
            },
            Event::Merge {
                index: 0,
                mask: 0xf,
                before: 0,
                after: 0xf,
            },
            Event::Merge {
                index: 1,
                mask: 0xf000000000000000,
                before: 0,
                after: 0xf000000000000000,
            },
            Event::End {
                layer: Layer::Word,
                next_bit: 68,
            },
        ]
    );

    Ok(())
}

#[test]
fn straddling_read_extracts_two_words() -> Result<(), Error> {
    let message = [0xabu64.to_be(), 0xcd00000000000000u64.to_be()];

    let events = RefCell::new(Vec::<Event<u64>>::new());
    let codec = Codec::with_tracer(recording(&events));

    let (value, _) = codec.read_bits(&message, 56, 16, FieldFlags::START_LOW)?;
    assert_eq!(value, 0xabcd);

    let events = events.take();
    assert_eq!(
        events[1],
        Event::Extract {
            index: 0,
            word: 0xab,
            value: 0xab00000000000000,
        }
    );
    assert_eq!(
        events[2],
        Event::Extract {
            index: 1,
            word: 0xcd00000000000000,
            value: 0x00cd000000000000,
        }
    );

    Ok(())
}

#[test]
fn nothing_is_reported_for_rejected_calls() {
    let events = RefCell::new(Vec::<Event<u64>>::new());
    let codec = Codec::with_tracer(recording(&events));

    let mut message = [0u64; 1];
    assert!(codec.write_bits(&mut message, 64, 1, 1, FieldFlags::ERASE).is_err());
    assert!(codec.read_bits_bytes(&message, 0, 9, &mut [0]).is_err());

    assert!(events.borrow().is_empty());
}

#[test]
fn byte_operations_report_their_scratch_buffer() -> Result<(), Error> {
    let events = RefCell::new(Vec::<Event<u64>>::new());
    let codec = Codec::with_tracer(recording(&events));

    let mut message = [0u64; 4];
    codec.write_bits_bytes(&mut message, 3, 148, &[0x5a; 19], FieldFlags::ERASE)?;

    let events = events.take();
    assert_eq!(
        events[0],
        Event::Begin {
            layer: Layer::Bytes,
            access: Access::Write,
            start_bit: 3,
            bit_len: 148,
        }
    );
    assert_eq!(events[1], Event::Scratch { words: 3 });
    assert_eq!(
        events.last(),
        Some(&Event::End {
            layer: Layer::Bytes,
            next_bit: 151,
        })
    );

    // One wide operation made of three single-word writes.
    let begins = |layer: Layer| {
        events
            .iter()
            .filter(|e| matches!(e, Event::Begin { layer: l, .. } if *l == layer))
            .count()
    };
    assert_eq!(begins(Layer::Wide), 1);
    assert_eq!(begins(Layer::Word), 3);

    Ok(())
}

#[test]
fn tracers_compose() -> Result<(), Error> {
    let count = RefCell::new(0);
    let counter = TraceFn(|_: &Event<u32>| *count.borrow_mut() += 1);

    // A borrowed tracer observes the writer's operations.
    let mut message = [0u32; 2];
    let mut writer = MessageWriter::with_codec(&mut message, Codec::with_tracer(&counter));
    writer.write(20, 0xfffff)?;
    writer.write(20, 0xfffff)?;
    // The second field straddles both words.
    assert_eq!(*count.borrow(), 3 + 4);

    LogTracer.trace(&Event::<u32>::Scratch { words: 1 });
    let codec = Codec::with_tracer(LogTracer);
    assert_eq!(codec.write_bits(&mut message, 0, 4, 0xau32, FieldFlags::ERASE)?, 4);

    Ok(())
}

#[derive(Default)]
struct MergeCounter {
    merges: Cell<usize>,
}

impl Tracer<u16> for MergeCounter {
    fn trace(&self, event: &Event<u16>) {
        if let Event::Merge { .. } = event {
            self.merges.set(self.merges.get() + 1);
        }
    }
}

#[test]
fn tracer_is_handed_back() -> Result<(), Error> {
    let codec = Codec::with_tracer(MergeCounter::default());

    // 40 bits at bit 4 of 16-bit words touch three words.
    let mut message = [0u16; 4];
    codec.write_bits_wide(&mut message, 4, 40, &[0xffff, 0xffff, 0xff00], FieldFlags::ERASE)?;

    let counter = codec.into_tracer();
    assert_eq!(counter.merges.get(), 5);

    Ok(())
}
