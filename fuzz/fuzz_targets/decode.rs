#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode and decode to the same tree.
    if let Ok(schema) = schema_pack::decode(data) {
        let bytes = schema_pack::encode(&schema).expect("decoded schema should re-encode");
        let again = schema_pack::decode(&bytes).expect("re-encoded schema should decode");
        assert_eq!(schema, again);
    }
});
