//! Rotation matrix of an extended pose.

use se23_core::{Layout, Scalar};
use se23_geo::Pose23;

/// Write the 3x3 rotation matrix of the pose stored in `inputs` into
/// `output`, column-major.
pub fn myfunc<T: Scalar>(inputs: &[T; 10], output: Option<&mut [T; 9]>) {
    if let Some(output) = output {
        Pose23::from_storage(inputs)
            .rotation()
            .to_rotation_matrix()
            .write_flat(Layout::ColMajor, output);
    }
}
