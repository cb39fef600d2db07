mod bit_field_tests;
mod world_tests;
