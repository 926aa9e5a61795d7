mod cipher_string_roundtrip;
