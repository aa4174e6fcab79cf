#![macro_use]

//! Derive the by-value operator forms from a by-reference implementation.

/// Given `impl $imp<&$u> for &$t`, implement the three remaining owned/borrowed combinations.
macro_rules! forward_binop_to_ref {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty => $o:ty) => {
        impl core::ops::$imp<$u> for $t {
            type Output = $o;

            fn $method(self, rhs: $u) -> $o {
                core::ops::$imp::$method(&self, &rhs)
            }
        }

        impl core::ops::$imp<&$u> for $t {
            type Output = $o;

            fn $method(self, rhs: &$u) -> $o {
                core::ops::$imp::$method(&self, rhs)
            }
        }

        impl core::ops::$imp<$u> for &$t {
            type Output = $o;

            fn $method(self, rhs: $u) -> $o {
                core::ops::$imp::$method(self, &rhs)
            }
        }
    };
}

/// Given `impl $imp<$s> for &$t` with a `Copy` scalar `$s`, implement it for the owned `$t`.
macro_rules! forward_scalar_binop_to_ref {
    (impl $imp:ident, $method:ident for $t:ty, $s:ty => $o:ty) => {
        impl core::ops::$imp<$s> for $t {
            type Output = $o;

            fn $method(self, rhs: $s) -> $o {
                core::ops::$imp::$method(&self, rhs)
            }
        }
    };
}

/// Implement `$imp<$u>` and `$imp<&$u>` for `$t` by rebinding the receiver to `&*self $op &rhs`.
macro_rules! forward_assign_to_ref {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty, $op:ident, $op_method:ident) => {
        impl core::ops::$imp<$u> for $t {
            fn $method(&mut self, rhs: $u) {
                *self = core::ops::$op::$op_method(&*self, &rhs);
            }
        }

        impl core::ops::$imp<&$u> for $t {
            fn $method(&mut self, rhs: &$u) {
                *self = core::ops::$op::$op_method(&*self, rhs);
            }
        }
    };
}

/// Implement `$imp<$s>` for `$t` with a `Copy` scalar `$s`, rebinding the receiver.
macro_rules! forward_scalar_assign_to_ref {
    (impl $imp:ident, $method:ident for $t:ty, $s:ty, $op:ident, $op_method:ident) => {
        impl core::ops::$imp<$s> for $t {
            fn $method(&mut self, rhs: $s) {
                *self = core::ops::$op::$op_method(&*self, rhs);
            }
        }
    };
}
