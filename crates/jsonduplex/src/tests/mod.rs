mod read_bad;
mod roundtrip;
