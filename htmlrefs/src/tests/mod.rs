// Cross-module tests exercising the public API as a whole.

mod properties;
