//! External names and argument shapes of the flat-buffer routines.

/// A named argument and its element count. Scalars have length 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arg {
    pub name: &'static str,
    pub len: usize,
}

const fn arg(name: &'static str, len: usize) -> Arg {
    Arg { name, len }
}

/// Stable external name plus input and output shapes of one routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub inputs: &'static [Arg],
    pub outputs: &'static [Arg],
}

pub const MYFUNCTION: Signature = Signature {
    name: "myfunction",
    inputs: &[arg("inputs", 4)],
    outputs: &[arg("c", 3)],
};

pub const MYFUNC: Signature = Signature {
    name: "myfunc",
    inputs: &[arg("inputs", 10)],
    outputs: &[arg("output", 9)],
};

pub const PREINTEGRATE: Signature = Signature {
    name: "preintegrate",
    inputs: &[
        arg("imu_noise", 6),
        arg("preint_prev", 55),
        arg("z_imu_est", 6),
        arg("dt", 1),
    ],
    outputs: &[arg("upsilon", 10), arg("cov", 81)],
};

/// Every routine exported to host environments.
pub const SIGNATURES: &[Signature] = &[PREINTEGRATE, MYFUNC, MYFUNCTION];

/// Look up a routine by its external name.
pub fn lookup(name: &str) -> Option<&'static Signature> {
    SIGNATURES.iter().find(|s| s.name == name)
}
