//! Known-answer tests: published vectors from the RFCs, the multibase
//! fixture suite, ZeroMQ and Bitcoin.

use base_prism::encoders::{base16, base32, base45, base58, base85, check};
use base_prism::multibase::{self, Multibase};

#[test]
fn test_base16_vectors() {
    assert_eq!(base16::upper().encode(&[0xAB, 0xCD]), "ABCD");
    assert_eq!(base16::lower().encode(b"yes mani !"), "796573206d616e692021");
    assert_eq!(
        base16::lower().decode("796573206d616e692021").unwrap(),
        b"yes mani !"
    );
}

#[test]
fn test_base58_bitcoin_vectors() {
    // From the rust-bitcoin/bitcoind test corpus.
    let cases: &[(&str, &str)] = &[
        ("", ""),
        ("61", "2g"),
        ("626262", "a3gV"),
        ("636363", "aPEr"),
        ("73696d706c792061206c6f6e6720737472696e67", "2cFupjhnEsSn59qHXstmK2ffpLv2"),
        ("00eb15231dfceb60925886b67d065299925915aeb172c06647", "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
        ("516b6fcd0f", "ABnLTmg"),
        ("bf4f89001e670274dd", "3SEo3LWLoPntC"),
        ("572e4794", "3EFU7m"),
        ("ecac89cad93923c02321", "EJDM8drfXA6uyA"),
        ("10c8511e", "Rt5zm"),
        ("00000000000000000000", "1111111111"),
    ];
    for (input_hex, expected) in cases {
        let data = hex::decode(input_hex).unwrap();
        assert_eq!(&base58::bitcoin().encode(&data), expected, "encode {}", input_hex);
        assert_eq!(&base58::bitcoin().decode(expected).unwrap(), &data, "decode {}", expected);
    }
}

#[test]
fn test_rfc4648_base32_vectors() {
    assert_eq!(base32::rfc4648().encode(b"foobar", true), "MZXW6YTBOI======");
    assert_eq!(base32::rfc4648().decode("MZXW6YTBOI======").unwrap(), b"foobar");
    assert_eq!(base32::extended_hex().encode(b"foobar", true), "CPNMUOJ1E8======");
}

#[test]
fn test_z85_vectors() {
    // The ZeroMQ RFC 32 reference frame.
    assert_eq!(
        base85::z85().encode(&[0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B]),
        "HelloWorld"
    );
    // The 32-byte key from the same RFC.
    let key = hex::decode("8e0bdd697628b91d8f245587ee95c5b04d48963f79259877b49cd9063aead3b7").unwrap();
    assert_eq!(
        base85::z85().encode(&key),
        "JTKVSB%%)wK0E.X)V>+}o?pNmC{O&4W4b!Ni{Lh6"
    );
}

#[test]
fn test_base45_vectors() {
    assert_eq!(base45::default().decode("BB8").unwrap(), b"AB");
    assert_eq!(base45::default().encode(b"AB"), "BB8");
    assert_eq!(base45::default().encode(b"Hello!!"), "%69 VD92EX0");
}

#[test]
fn test_rfc1924_ipv6_vector() {
    let address = [
        0x10, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x00, 0x20, 0x0C, 0x41,
        0x7A,
    ];
    assert_eq!(base85::encode_ipv6(&address), "4)+k&C#VzJ4br>0wv%Yp");
    assert_eq!(base85::decode_ipv6("4)+k&C#VzJ4br>0wv%Yp").unwrap(), address);
}

#[test]
fn test_multibase_fixtures() {
    // From the multibase specification's "yes mani !" test table.
    let payload = b"yes mani !";
    let cases: &[(Multibase, &str)] = &[
        (Multibase::Base8, "7362625631006654133464440102"),
        (Multibase::Base16Lower, "f796573206d616e692021"),
        (Multibase::Base16Upper, "F796573206D616E692021"),
        (Multibase::Base32Lower, "bpfsxgidnmfxgsibb"),
        (Multibase::Base32Upper, "BPFSXGIDNMFXGSIBB"),
        (Multibase::Base58Btc, "z7paNL19xttacUY"),
        (Multibase::Base64, "meWVzIG1hbmkgIQ"),
        (Multibase::Base64Pad, "MeWVzIG1hbmkgIQ=="),
        (Multibase::Base256Emoji, "🚀🏃✋🌈😅🌷🤤😻🌟😅👏"),
    ];
    for (base, expected) in cases {
        assert_eq!(&multibase::encode(*base, payload), expected, "{:?}", base);
        let (decoded_base, bytes) = multibase::decode(expected).unwrap();
        assert_eq!(decoded_base, *base);
        assert_eq!(bytes, payload);
    }
}

#[test]
fn test_multibase_hex_vector_from_spec() {
    let (base, bytes) = multibase::decode("f796573206d616e692021").unwrap();
    assert_eq!(base, Multibase::Base16Lower);
    assert_eq!(String::from_utf8(bytes).unwrap(), "yes mani !");
}

#[test]
fn test_base58check_known_address() {
    // The canonical all-zero burn address.
    assert_eq!(check::base58check_encode(&[0u8; 20], 0), "1111111111111111111114oLvT2");

    let (version, payload) =
        check::base58check_decode("1111111111111111111114oLvT2").unwrap();
    assert_eq!(version, 0);
    assert_eq!(payload, vec![0u8; 20]);
}

#[test]
fn test_ascii85_wikipedia_sentence() {
    // The classic Leviathan opening, first eleven bytes.
    assert_eq!(base85::ascii85().encode(b"Man is dist"), "9jqo^BlbD-Ble@");
    assert_eq!(base85::ascii85().decode("9jqo^BlbD-Ble@").unwrap(), b"Man is dist");
}
