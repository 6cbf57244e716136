// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Key codes and key name lookups.

use crate::{Result, api::SdlApi, marshal::text};

native_constants! {
    /// A virtual key code (`SDL_Keycode`).
    ///
    /// Printable keys use their Unicode code point. Keys without one carry
    /// the scancode with bit 30 set.
    pub struct Keycode(u32) {
        UNKNOWN = 0x00000000,
        RETURN = 0x0000000d,
        ESCAPE = 0x0000001b,
        BACKSPACE = 0x00000008,
        TAB = 0x00000009,
        SPACE = 0x00000020,
        EXCLAIM = 0x00000021,
        DBL_APOSTROPHE = 0x00000022,
        HASH = 0x00000023,
        DOLLAR = 0x00000024,
        PERCENT = 0x00000025,
        AMPERSAND = 0x00000026,
        APOSTROPHE = 0x00000027,
        LEFT_PAREN = 0x00000028,
        RIGHT_PAREN = 0x00000029,
        ASTERISK = 0x0000002a,
        PLUS = 0x0000002b,
        COMMA = 0x0000002c,
        MINUS = 0x0000002d,
        PERIOD = 0x0000002e,
        SLASH = 0x0000002f,
        DIGIT_0 = 0x00000030,
        DIGIT_1 = 0x00000031,
        DIGIT_2 = 0x00000032,
        DIGIT_3 = 0x00000033,
        DIGIT_4 = 0x00000034,
        DIGIT_5 = 0x00000035,
        DIGIT_6 = 0x00000036,
        DIGIT_7 = 0x00000037,
        DIGIT_8 = 0x00000038,
        DIGIT_9 = 0x00000039,
        COLON = 0x0000003a,
        SEMICOLON = 0x0000003b,
        LESS = 0x0000003c,
        EQUALS = 0x0000003d,
        GREATER = 0x0000003e,
        QUESTION = 0x0000003f,
        AT = 0x00000040,
        LEFT_BRACKET = 0x0000005b,
        BACKSLASH = 0x0000005c,
        RIGHT_BRACKET = 0x0000005d,
        CARET = 0x0000005e,
        UNDERSCORE = 0x0000005f,
        GRAVE = 0x00000060,
        A = 0x00000061,
        B = 0x00000062,
        C = 0x00000063,
        D = 0x00000064,
        E = 0x00000065,
        F = 0x00000066,
        G = 0x00000067,
        H = 0x00000068,
        I = 0x00000069,
        J = 0x0000006a,
        K = 0x0000006b,
        L = 0x0000006c,
        M = 0x0000006d,
        N = 0x0000006e,
        O = 0x0000006f,
        P = 0x00000070,
        Q = 0x00000071,
        R = 0x00000072,
        S = 0x00000073,
        T = 0x00000074,
        U = 0x00000075,
        V = 0x00000076,
        W = 0x00000077,
        X = 0x00000078,
        Y = 0x00000079,
        Z = 0x0000007a,
        LEFT_BRACE = 0x0000007b,
        PIPE = 0x0000007c,
        RIGHT_BRACE = 0x0000007d,
        TILDE = 0x0000007e,
        DELETE = 0x0000007f,
        PLUS_MINUS = 0x000000b1,
        CAPS_LOCK = 0x40000039,
        F1 = 0x4000003a,
        F2 = 0x4000003b,
        F3 = 0x4000003c,
        F4 = 0x4000003d,
        F5 = 0x4000003e,
        F6 = 0x4000003f,
        F7 = 0x40000040,
        F8 = 0x40000041,
        F9 = 0x40000042,
        F10 = 0x40000043,
        F11 = 0x40000044,
        F12 = 0x40000045,
        PRINT_SCREEN = 0x40000046,
        SCROLL_LOCK = 0x40000047,
        PAUSE = 0x40000048,
        INSERT = 0x40000049,
        HOME = 0x4000004a,
        PAGE_UP = 0x4000004b,
        END = 0x4000004d,
        PAGE_DOWN = 0x4000004e,
        RIGHT = 0x4000004f,
        LEFT = 0x40000050,
        DOWN = 0x40000051,
        UP = 0x40000052,
        NUM_LOCK_CLEAR = 0x40000053,
        KP_DIVIDE = 0x40000054,
        KP_MULTIPLY = 0x40000055,
        KP_MINUS = 0x40000056,
        KP_PLUS = 0x40000057,
        KP_ENTER = 0x40000058,
        KP_1 = 0x40000059,
        KP_2 = 0x4000005a,
        KP_3 = 0x4000005b,
        KP_4 = 0x4000005c,
        KP_5 = 0x4000005d,
        KP_6 = 0x4000005e,
        KP_7 = 0x4000005f,
        KP_8 = 0x40000060,
        KP_9 = 0x40000061,
        KP_0 = 0x40000062,
        KP_PERIOD = 0x40000063,
        APPLICATION = 0x40000065,
        POWER = 0x40000066,
        KP_EQUALS = 0x40000067,
        F13 = 0x40000068,
        F14 = 0x40000069,
        F15 = 0x4000006a,
        F16 = 0x4000006b,
        F17 = 0x4000006c,
        F18 = 0x4000006d,
        F19 = 0x4000006e,
        F20 = 0x4000006f,
        F21 = 0x40000070,
        F22 = 0x40000071,
        F23 = 0x40000072,
        F24 = 0x40000073,
        EXECUTE = 0x40000074,
        HELP = 0x40000075,
        MENU = 0x40000076,
        SELECT = 0x40000077,
        STOP = 0x40000078,
        AGAIN = 0x40000079,
        UNDO = 0x4000007a,
        CUT = 0x4000007b,
        COPY = 0x4000007c,
        PASTE = 0x4000007d,
        FIND = 0x4000007e,
        MUTE = 0x4000007f,
        VOLUME_UP = 0x40000080,
        VOLUME_DOWN = 0x40000081,
        KP_COMMA = 0x40000085,
        KP_EQUALSAS400 = 0x40000086,
        ALTERASE = 0x40000099,
        SYSREQ = 0x4000009a,
        CANCEL = 0x4000009b,
        CLEAR = 0x4000009c,
        PRIOR = 0x4000009d,
        RETURN2 = 0x4000009e,
        SEPARATOR = 0x4000009f,
        OUT = 0x400000a0,
        OPER = 0x400000a1,
        CLEAR_AGAIN = 0x400000a2,
        CRSEL = 0x400000a3,
        EXSEL = 0x400000a4,
        KP_00 = 0x400000b0,
        KP_000 = 0x400000b1,
        THOUSANDS_SEPARATOR = 0x400000b2,
        DECIMAL_SEPARATOR = 0x400000b3,
        CURRENCY_UNIT = 0x400000b4,
        CURRENCY_SUBUNIT = 0x400000b5,
        KP_LEFT_PAREN = 0x400000b6,
        KP_RIGHT_PAREN = 0x400000b7,
        KP_LEFT_BRACE = 0x400000b8,
        KP_RIGHT_BRACE = 0x400000b9,
        KP_TAB = 0x400000ba,
        KP_BACKSPACE = 0x400000bb,
        KP_A = 0x400000bc,
        KP_B = 0x400000bd,
        KP_C = 0x400000be,
        KP_D = 0x400000bf,
        KP_E = 0x400000c0,
        KP_F = 0x400000c1,
        KP_XOR = 0x400000c2,
        KP_POWER = 0x400000c3,
        KP_PERCENT = 0x400000c4,
        KP_LESS = 0x400000c5,
        KP_GREATER = 0x400000c6,
        KP_AMPERSAND = 0x400000c7,
        KP_DBL_AMPERSAND = 0x400000c8,
        KP_VERTICAL_BAR = 0x400000c9,
        KP_DBL_VERTICAL_BAR = 0x400000ca,
        KP_COLON = 0x400000cb,
        KP_HASH = 0x400000cc,
        KP_SPACE = 0x400000cd,
        KP_AT = 0x400000ce,
        KP_EXCLAM = 0x400000cf,
        KP_MEM_STORE = 0x400000d0,
        KP_MEM_RECALL = 0x400000d1,
        KP_MEM_CLEAR = 0x400000d2,
        KP_MEM_ADD = 0x400000d3,
        KP_MEM_SUBTRACT = 0x400000d4,
        KP_MEM_MULTIPLY = 0x400000d5,
        KP_MEM_DIVIDE = 0x400000d6,
        KP_PLUS_MINUS = 0x400000d7,
        KP_CLEAR = 0x400000d8,
        KP_CLEAR_ENTRY = 0x400000d9,
        KP_BINARY = 0x400000da,
        KP_OCTAL = 0x400000db,
        KP_DECIMAL = 0x400000dc,
        KP_HEXADECIMAL = 0x400000dd,
        LCTRL = 0x400000e0,
        LSHIFT = 0x400000e1,
        LALT = 0x400000e2,
        LGUI = 0x400000e3,
        RCTRL = 0x400000e4,
        RSHIFT = 0x400000e5,
        RALT = 0x400000e6,
        RGUI = 0x400000e7,
        MODE = 0x40000101,
        SLEEP = 0x40000102,
        WAKE = 0x40000103,
        CHANNEL_INCREMENT = 0x40000104,
        CHANNEL_DECREMENT = 0x40000105,
        MEDIA_PLAY = 0x40000106,
        MEDIA_PAUSE = 0x40000107,
        MEDIA_RECORD = 0x40000108,
        MEDIA_FAST_FORWARD = 0x40000109,
        MEDIA_REWIND = 0x4000010a,
        MEDIA_NEXT_TRACK = 0x4000010b,
        MEDIA_PREVIOUS_TRACK = 0x4000010c,
        MEDIA_STOP = 0x4000010d,
        MEDIA_EJECT = 0x4000010e,
        MEDIA_PLAY_PAUSE = 0x4000010f,
        MEDIA_SELECT = 0x40000110,
        AC_NEW = 0x40000111,
        AC_OPEN = 0x40000112,
        AC_CLOSE = 0x40000113,
        AC_EXIT = 0x40000114,
        AC_SAVE = 0x40000115,
        AC_PRINT = 0x40000116,
        AC_PROPERTIES = 0x40000117,
        AC_SEARCH = 0x40000118,
        AC_HOME = 0x40000119,
        AC_BACK = 0x4000011a,
        AC_FORWARD = 0x4000011b,
        AC_STOP = 0x4000011c,
        AC_REFRESH = 0x4000011d,
        AC_BOOKMARKS = 0x4000011e,
        SOFT_LEFT = 0x4000011f,
        SOFT_RIGHT = 0x40000120,
        CALL = 0x40000121,
        END_CALL = 0x40000122,
        LEFT_TAB = 0x20000001,
        LEVEL5_SHIFT = 0x20000002,
        MULTI_KEY_COMPOSE = 0x20000003,
        LMETA = 0x20000004,
        RMETA = 0x20000005,
        LHYPER = 0x20000006,
        RHYPER = 0x20000007,
    }
}

impl Keycode {
    /// Bit set on key codes derived from a scancode.
    pub const SCANCODE_MASK: u32 = 1 << 30;

    /// Returns `true` if this key code has no printable character.
    pub const fn is_scancode_derived(self) -> bool {
        self.0 & Self::SCANCODE_MASK != 0
    }
}

impl SdlApi {
    /// Returns the human-readable name of `key`.
    ///
    /// SDL answers with an empty string for keys it has no name for.
    pub fn key_name(&self, key: Keycode) -> Result<String> {
        let name = unsafe { self.get_key_name(key.raw()) }?;
        Ok(unsafe { text::from_borrowed(name) }?.unwrap_or_default())
    }

    /// Looks up a key code from its human-readable name.
    pub fn key_from_name(&self, name: &str) -> Result<Keycode> {
        self.clear_last_error()?;
        let key = text::with_c_str(name, |name| Ok(unsafe { self.get_key_from_name(name) }?))?;
        if key == Keycode::UNKNOWN.raw() {
            return Err(self.call_failed("SDL_GetKeyFromName"));
        }
        Ok(Keycode(key))
    }
}
