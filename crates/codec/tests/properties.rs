use brokode::{decode, encode, Codec, LossCause, Normalizer, Tone};
use brokode_core::alphabet::letters::LETTERS;
use brokode_core::letter_token;
use unicode_normalization::UnicodeNormalization;

#[test]
fn base_letters_round_trip() {
    for (letter, token) in LETTERS {
        let text = letter.to_string();
        let encoded = encode(&text);
        if letter == ' ' {
            // a space-only line is blank and encodes to an empty group
            assert_eq!(encoded, "C()");
            continue;
        }
        assert_eq!(encoded, format!("C({})", token));
        assert_eq!(decode(&encoded), text);
    }
}

#[test]
fn single_tone_round_trips() {
    assert_eq!(encode("à"), "C(78hh)");
    assert_eq!(decode("C(78hh)"), "à");

    for base in ['a', 'e', 'i', 'o', 'u', 'y'] {
        let token = letter_token(base).unwrap();
        for tone in Tone::ALL {
            let text = nfc(&[base, tone.mark()].iter().collect::<String>());
            let encoded = encode(&text);
            assert_eq!(encoded, format!("C({}{})", token, tone.tag()));
            assert_eq!(decode(&encoded), text, "tone {:?} on {}", tone, base);
        }
    }
}

#[test]
fn family_and_tone_round_trip() {
    assert_eq!(encode("ồ"), "C(24km/hh)");
    assert_eq!(decode("C(24km/hh)"), "ồ");

    for variant in ['ă', 'â', 'ê', 'ô', 'ơ', 'ư', 'đ'] {
        let text = variant.to_string();
        assert_eq!(decode(&encode(&text)), text);
    }

    for variant in ['ă', 'â', 'ê', 'ô', 'ơ', 'ư'] {
        let decomposed = Normalizer::decompose(variant);
        let family = decomposed.modifiers.family.unwrap();
        for tone in Tone::ALL {
            let text = nfc(&[variant, tone.mark()].iter().collect::<String>());
            assert_eq!(text.chars().count(), 1);

            let encoded = encode(&text);
            assert_eq!(
                encoded,
                format!(
                    "C({}{}/{})",
                    letter_token(decomposed.base).unwrap(),
                    family.tag(),
                    tone.tag()
                )
            );
            assert_eq!(decode(&encoded), text);
        }
    }
}

#[test]
fn equivalent_unicode_spellings_encode_alike() {
    let spellings = [
        "ặ",
        "a\u{0323}\u{0306}",
        "a\u{0306}\u{0323}",
        "ă\u{0323}",
        "ạ\u{0306}",
    ];
    for spelling in spellings {
        assert_eq!(encode(spelling), "C(78kw/nn)", "{:?}", spelling);
    }
    assert_eq!(decode("C(78kw/nn)"), "ặ");

    for spelling in ["ồ", "o\u{0302}\u{0300}", "ô\u{0300}"] {
        assert_eq!(encode(spelling), "C(24km/hh)", "{:?}", spelling);
    }
}

#[test]
fn vietnamese_sentence_round_trips() {
    let text = "tôi yêu tiếng việt\nnước đẹp quá\nmỗi ngày học một chữ";
    assert_eq!(decode(&encode(text)), text);
}

#[test]
fn stroked_d() {
    assert_eq!(encode("đ"), "C(69kw)");
    assert_eq!(decode("C(69kw)"), "đ");
}

#[test]
fn zero_decodes_to_space() {
    assert_eq!(encode("0"), "C(ao)");
    assert_eq!(decode("C(ao)"), " ");
}

#[test]
fn digits_one_to_nine_round_trip() {
    let text = "123456789";
    assert_eq!(encode(text), "C(9a1.8b1.9c1.8d1.9e1.8f1.9g1.8h1.9i1)");
    assert_eq!(decode(&encode(text)), text);
}

#[test]
fn multi_line() {
    let encoded = encode("ừ\nừ");
    assert_eq!(encoded, "C(6kw/hh)\nC(6kw/hh)");
    assert_eq!(decode(&encoded), "ừ\nừ");
}

#[test]
fn unknown_character() {
    assert_eq!(encode("ừ@ừ"), "C(6kw/hh.?.6kw/hh)");
    assert_eq!(decode("C(6kw/hh.?.6kw/hh)"), "ừ?ừ");
    assert_eq!(decode("C(78.999.78)"), "a?a");
}

#[test]
fn pass_through_is_idempotent() {
    for plain in ["xin chào", "C(78", "", "  spaced  \nsecond line", "(C78)"] {
        assert_eq!(decode(plain), plain);
        assert_eq!(decode(&decode(plain)), plain);
    }
}

#[test]
fn mixed_plain_and_encoded_lines() {
    assert_eq!(decode("header\nC(75.78)\nfooter"), "header\nba\nfooter");
}

#[test]
fn reports_losses_in_both_directions() {
    let codec = Codec::default();

    let encoded = codec.encode_with_report("ab\nc#d");
    assert_eq!(encoded.text, "C(78.75)\nC(72.?.69)");
    assert_eq!(encoded.report.len(), 1);
    let loss = &encoded.report.losses()[0];
    assert_eq!((loss.line, loss.column), (2, 2));
    assert_eq!(loss.cause, LossCause::UnrecognizedChar { ch: '#' });

    let decoded = codec.decode_with_report("C(78)\nC(1.x.2)");
    assert_eq!(decoded.text, "a\nz?y");
    assert_eq!(decoded.report.len(), 1);
    assert_eq!(decoded.report.losses()[0].line, 2);
    assert_eq!(decoded.report.losses()[0].column, 2);
}

#[test]
fn codec_is_shareable_across_threads() {
    let codec = std::sync::Arc::new(Codec::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let codec = codec.clone();
            std::thread::spawn(move || codec.decode(&codec.encode("việt nam")))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "việt nam");
    }
}

fn nfc(text: &str) -> String {
    text.nfc().collect()
}
