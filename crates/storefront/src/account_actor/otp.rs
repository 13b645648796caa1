use crate::validation::local_part;
use rand::Rng;

pub const OTP_LENGTH: usize = 6;

/// Six random decimal digits. Leading zeros are kept.
pub fn generate_otp() -> String {
    let mut rng = rand::thread_rng();
    (0..OTP_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// HTML body of the verification mail, greeting the local part of the address.
pub fn render_otp_email(email: &str, otp: &str) -> String {
    let name = local_part(email);
    format!(
        "<!DOCTYPE html>\n<html>\n<body>\n\n\
         <p>Hello <strong>{name}!</strong></p>\n\
         <p>Kindly find your OTP below to activate your account:</p>\n\
         <h2>{otp}</h2>\n\n\
         </body>\n</html>\n"
    )
}
