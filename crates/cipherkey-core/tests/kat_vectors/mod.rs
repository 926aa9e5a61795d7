mod aes_cbc;
mod hkdf_expand;
