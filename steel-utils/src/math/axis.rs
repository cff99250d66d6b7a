/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The east/west axis.
    X,
    /// The vertical axis.
    Y,
    /// The north/south axis.
    Z,
}

impl Axis {
    /// All axes in x, y, z order.
    pub const VALUES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}
