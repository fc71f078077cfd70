use std::env;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gost::crypto::f_function::{round_function, substitution_layer};
use gost::crypto::key::Key;
use gost::crypto::key_schedule::expand_key;
use gost::crypto::sboxes::ParamSet;
use gost::{GostCipher, GostError};
use num_bigint::BigUint;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let param_set: ParamSet = match env::var("GOST_SBOX") {
        Ok(name) => name.parse()?,
        Err(_) => ParamSet::default(),
    };
    let sbox = param_set.table();
    log::info!("using S-box parameter set {}", param_set);

    // --------------------------------------------------------
    // 0) Key schedule & single-block demo
    // --------------------------------------------------------
    println!("=== Key schedule & single-block demo ({}) ===", param_set);
    let key = BigUint::parse_bytes(
        b"ffeeddccbbaa99887766554433221100f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff",
        16,
    )
    .ok_or("bad demo key")?;

    let subkeys = expand_key(&Key::from_biguint(&key)?);
    for (index, subkey) in subkeys.words().iter().enumerate() {
        println!(" K{} = {:08x}", index, subkey);
    }

    let cipher = GostCipher::new(&key, sbox)?;
    let block = 0xFEDC_BA98_7654_3210u64;
    let encrypted = cipher.encrypt(block);
    let decrypted = cipher.decrypt(encrypted);
    println!(" Plaintext block: {:016x}", block);
    println!(" Encrypted block: {:016x}", encrypted);
    println!(" Decrypted block: {:016x}", decrypted);
    assert_eq!(decrypted, block);

    // --------------------------------------------------------
    // 1) Substitution & round function demo
    // --------------------------------------------------------
    println!("\n=== Round function demo ===");
    for &input in &[0x0000_0000u32, 0xFDB9_7531, 0xFFFF_FFFF] {
        println!("  t(0x{:08x}) = 0x{:08x}", input, substitution_layer(input, &sbox));
        for &round_key in &[0x0000_0000u32, 0x8765_4321] {
            let output = round_function(input, round_key, &sbox);
            println!("  f(0x{:08x}, 0x{:08x}) = 0x{:08x}", input, round_key, output);
        }
    }

    // --------------------------------------------------------
    // 2) Re-keying & random blocks
    // --------------------------------------------------------
    println!("\n=== Random key demo ===");
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    for _ in 0..4 {
        let words: [u32; 8] = std::array::from_fn(|_| rng.random());
        cipher.replace_key(&Key::from_words(words));
        let block: u64 = rng.random();
        let encrypted = cipher.encrypt(block);
        assert_eq!(cipher.decrypt(encrypted), block);
        println!("  {:016x} -> {:016x} OK", block, encrypted);
    }

    // --------------------------------------------------------
    // 3) Oversized key
    // --------------------------------------------------------
    println!("\n=== Key length check ===");
    let oversized = BigUint::from(1u8) << 256usize;
    match cipher.set_key(&oversized) {
        Err(err @ GostError::InvalidKeyLength { .. }) => println!("  rejected: {}", err),
        Ok(()) => println!("  unexpectedly accepted a 257-bit key"),
    }

    Ok(())
}
