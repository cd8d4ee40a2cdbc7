use chrono::Utc;
use rand::Rng;

const NAME_PREFIX: &str = "tts-";
const NAME_EXTENSION: &str = ".wav";
const TOKEN_LEN: usize = 6;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// How many fresh names a store tries before giving up on a write.
pub const MAX_NAME_ATTEMPTS: usize = 8;

/// `tts-<unix millis>-<6 base36 chars>.wav`
pub fn generate_name() -> String {
    format!(
        "{}{}-{}{}",
        NAME_PREFIX,
        Utc::now().timestamp_millis(),
        random_token(),
        NAME_EXTENSION
    )
}

fn random_token() -> String {
    // thread_rng is a CSPRNG seeded from the OS
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}
