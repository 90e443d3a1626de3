pub mod modmask_lookup;
