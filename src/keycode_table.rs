// Keycode tables for the QMK basic and VIA custom keycode ranges.
//
// Values follow `quantum/keycodes.h`; short aliases follow the QMK keycode docs.

use super::Keycode;

pub const KC_NO: Keycode = Keycode(0x0000);
pub const KC_TRANSPARENT: Keycode = Keycode(0x0001);
pub const KC_POST_FAIL: Keycode = Keycode(0x0002);
pub const KC_UNDEFINED: Keycode = Keycode(0x0003);
pub const KC_A: Keycode = Keycode(0x0004);
pub const KC_B: Keycode = Keycode(0x0005);
pub const KC_C: Keycode = Keycode(0x0006);
pub const KC_D: Keycode = Keycode(0x0007);
pub const KC_E: Keycode = Keycode(0x0008);
pub const KC_F: Keycode = Keycode(0x0009);
pub const KC_G: Keycode = Keycode(0x000A);
pub const KC_H: Keycode = Keycode(0x000B);
pub const KC_I: Keycode = Keycode(0x000C);
pub const KC_J: Keycode = Keycode(0x000D);
pub const KC_K: Keycode = Keycode(0x000E);
pub const KC_L: Keycode = Keycode(0x000F);
pub const KC_M: Keycode = Keycode(0x0010);
pub const KC_N: Keycode = Keycode(0x0011);
pub const KC_O: Keycode = Keycode(0x0012);
pub const KC_P: Keycode = Keycode(0x0013);
pub const KC_Q: Keycode = Keycode(0x0014);
pub const KC_R: Keycode = Keycode(0x0015);
pub const KC_S: Keycode = Keycode(0x0016);
pub const KC_T: Keycode = Keycode(0x0017);
pub const KC_U: Keycode = Keycode(0x0018);
pub const KC_V: Keycode = Keycode(0x0019);
pub const KC_W: Keycode = Keycode(0x001A);
pub const KC_X: Keycode = Keycode(0x001B);
pub const KC_Y: Keycode = Keycode(0x001C);
pub const KC_Z: Keycode = Keycode(0x001D);
pub const KC_1: Keycode = Keycode(0x001E);
pub const KC_2: Keycode = Keycode(0x001F);
pub const KC_3: Keycode = Keycode(0x0020);
pub const KC_4: Keycode = Keycode(0x0021);
pub const KC_5: Keycode = Keycode(0x0022);
pub const KC_6: Keycode = Keycode(0x0023);
pub const KC_7: Keycode = Keycode(0x0024);
pub const KC_8: Keycode = Keycode(0x0025);
pub const KC_9: Keycode = Keycode(0x0026);
pub const KC_0: Keycode = Keycode(0x0027);
pub const KC_ENTER: Keycode = Keycode(0x0028);
pub const KC_ESCAPE: Keycode = Keycode(0x0029);
pub const KC_BACKSPACE: Keycode = Keycode(0x002A);
pub const KC_TAB: Keycode = Keycode(0x002B);
pub const KC_SPACE: Keycode = Keycode(0x002C);
pub const KC_MINUS: Keycode = Keycode(0x002D);
pub const KC_EQUAL: Keycode = Keycode(0x002E);
pub const KC_LEFT_BRACKET: Keycode = Keycode(0x002F);
pub const KC_RIGHT_BRACKET: Keycode = Keycode(0x0030);
pub const KC_BACKSLASH: Keycode = Keycode(0x0031);
pub const KC_NONUS_HASH: Keycode = Keycode(0x0032);
pub const KC_SEMICOLON: Keycode = Keycode(0x0033);
pub const KC_QUOTE: Keycode = Keycode(0x0034);
pub const KC_GRAVE: Keycode = Keycode(0x0035);
pub const KC_COMMA: Keycode = Keycode(0x0036);
pub const KC_DOT: Keycode = Keycode(0x0037);
pub const KC_SLASH: Keycode = Keycode(0x0038);
pub const KC_CAPS_LOCK: Keycode = Keycode(0x0039);
pub const KC_F1: Keycode = Keycode(0x003A);
pub const KC_F2: Keycode = Keycode(0x003B);
pub const KC_F3: Keycode = Keycode(0x003C);
pub const KC_F4: Keycode = Keycode(0x003D);
pub const KC_F5: Keycode = Keycode(0x003E);
pub const KC_F6: Keycode = Keycode(0x003F);
pub const KC_F7: Keycode = Keycode(0x0040);
pub const KC_F8: Keycode = Keycode(0x0041);
pub const KC_F9: Keycode = Keycode(0x0042);
pub const KC_F10: Keycode = Keycode(0x0043);
pub const KC_F11: Keycode = Keycode(0x0044);
pub const KC_F12: Keycode = Keycode(0x0045);
pub const KC_PRINT_SCREEN: Keycode = Keycode(0x0046);
pub const KC_SCROLL_LOCK: Keycode = Keycode(0x0047);
pub const KC_PAUSE: Keycode = Keycode(0x0048);
pub const KC_INSERT: Keycode = Keycode(0x0049);
pub const KC_HOME: Keycode = Keycode(0x004A);
pub const KC_PAGE_UP: Keycode = Keycode(0x004B);
pub const KC_DELETE: Keycode = Keycode(0x004C);
pub const KC_END: Keycode = Keycode(0x004D);
pub const KC_PAGE_DOWN: Keycode = Keycode(0x004E);
pub const KC_RIGHT: Keycode = Keycode(0x004F);
pub const KC_LEFT: Keycode = Keycode(0x0050);
pub const KC_DOWN: Keycode = Keycode(0x0051);
pub const KC_UP: Keycode = Keycode(0x0052);
pub const KC_NUM_LOCK: Keycode = Keycode(0x0053);
pub const KC_KP_SLASH: Keycode = Keycode(0x0054);
pub const KC_KP_ASTERISK: Keycode = Keycode(0x0055);
pub const KC_KP_MINUS: Keycode = Keycode(0x0056);
pub const KC_KP_PLUS: Keycode = Keycode(0x0057);
pub const KC_KP_ENTER: Keycode = Keycode(0x0058);
pub const KC_KP_1: Keycode = Keycode(0x0059);
pub const KC_KP_2: Keycode = Keycode(0x005A);
pub const KC_KP_3: Keycode = Keycode(0x005B);
pub const KC_KP_4: Keycode = Keycode(0x005C);
pub const KC_KP_5: Keycode = Keycode(0x005D);
pub const KC_KP_6: Keycode = Keycode(0x005E);
pub const KC_KP_7: Keycode = Keycode(0x005F);
pub const KC_KP_8: Keycode = Keycode(0x0060);
pub const KC_KP_9: Keycode = Keycode(0x0061);
pub const KC_KP_0: Keycode = Keycode(0x0062);
pub const KC_KP_DOT: Keycode = Keycode(0x0063);
pub const KC_NONUS_BACKSLASH: Keycode = Keycode(0x0064);
pub const KC_APPLICATION: Keycode = Keycode(0x0065);
pub const KC_KB_POWER: Keycode = Keycode(0x0066);
pub const KC_KP_EQUAL: Keycode = Keycode(0x0067);
pub const KC_F13: Keycode = Keycode(0x0068);
pub const KC_F14: Keycode = Keycode(0x0069);
pub const KC_F15: Keycode = Keycode(0x006A);
pub const KC_F16: Keycode = Keycode(0x006B);
pub const KC_F17: Keycode = Keycode(0x006C);
pub const KC_F18: Keycode = Keycode(0x006D);
pub const KC_F19: Keycode = Keycode(0x006E);
pub const KC_F20: Keycode = Keycode(0x006F);
pub const KC_F21: Keycode = Keycode(0x0070);
pub const KC_F22: Keycode = Keycode(0x0071);
pub const KC_F23: Keycode = Keycode(0x0072);
pub const KC_F24: Keycode = Keycode(0x0073);
pub const KC_EXECUTE: Keycode = Keycode(0x0074);
pub const KC_HELP: Keycode = Keycode(0x0075);
pub const KC_MENU: Keycode = Keycode(0x0076);
pub const KC_SELECT: Keycode = Keycode(0x0077);
pub const KC_STOP: Keycode = Keycode(0x0078);
pub const KC_AGAIN: Keycode = Keycode(0x0079);
pub const KC_UNDO: Keycode = Keycode(0x007A);
pub const KC_CUT: Keycode = Keycode(0x007B);
pub const KC_COPY: Keycode = Keycode(0x007C);
pub const KC_PASTE: Keycode = Keycode(0x007D);
pub const KC_FIND: Keycode = Keycode(0x007E);
pub const KC_KB_MUTE: Keycode = Keycode(0x007F);
pub const KC_KB_VOLUME_UP: Keycode = Keycode(0x0080);
pub const KC_KB_VOLUME_DOWN: Keycode = Keycode(0x0081);
pub const KC_LOCKING_CAPS_LOCK: Keycode = Keycode(0x0082);
pub const KC_LOCKING_NUM_LOCK: Keycode = Keycode(0x0083);
pub const KC_LOCKING_SCROLL_LOCK: Keycode = Keycode(0x0084);
pub const KC_KP_COMMA: Keycode = Keycode(0x0085);
pub const KC_KP_EQUAL_AS400: Keycode = Keycode(0x0086);
pub const KC_INTERNATIONAL_1: Keycode = Keycode(0x0087);
pub const KC_INTERNATIONAL_2: Keycode = Keycode(0x0088);
pub const KC_INTERNATIONAL_3: Keycode = Keycode(0x0089);
pub const KC_INTERNATIONAL_4: Keycode = Keycode(0x008A);
pub const KC_INTERNATIONAL_5: Keycode = Keycode(0x008B);
pub const KC_INTERNATIONAL_6: Keycode = Keycode(0x008C);
pub const KC_INTERNATIONAL_7: Keycode = Keycode(0x008D);
pub const KC_INTERNATIONAL_8: Keycode = Keycode(0x008E);
pub const KC_INTERNATIONAL_9: Keycode = Keycode(0x008F);
pub const KC_LANGUAGE_1: Keycode = Keycode(0x0090);
pub const KC_LANGUAGE_2: Keycode = Keycode(0x0091);
pub const KC_LANGUAGE_3: Keycode = Keycode(0x0092);
pub const KC_LANGUAGE_4: Keycode = Keycode(0x0093);
pub const KC_LANGUAGE_5: Keycode = Keycode(0x0094);
pub const KC_LANGUAGE_6: Keycode = Keycode(0x0095);
pub const KC_LANGUAGE_7: Keycode = Keycode(0x0096);
pub const KC_LANGUAGE_8: Keycode = Keycode(0x0097);
pub const KC_LANGUAGE_9: Keycode = Keycode(0x0098);
pub const KC_ALTERNATE_ERASE: Keycode = Keycode(0x0099);
pub const KC_SYSTEM_REQUEST: Keycode = Keycode(0x009A);
pub const KC_CANCEL: Keycode = Keycode(0x009B);
pub const KC_CLEAR: Keycode = Keycode(0x009C);
pub const KC_PRIOR: Keycode = Keycode(0x009D);
pub const KC_RETURN: Keycode = Keycode(0x009E);
pub const KC_SEPARATOR: Keycode = Keycode(0x009F);
pub const KC_OUT: Keycode = Keycode(0x00A0);
pub const KC_OPER: Keycode = Keycode(0x00A1);
pub const KC_CLEAR_AGAIN: Keycode = Keycode(0x00A2);
pub const KC_CRSEL: Keycode = Keycode(0x00A3);
pub const KC_EXSEL: Keycode = Keycode(0x00A4);
pub const KC_SYSTEM_POWER: Keycode = Keycode(0x00A5);
pub const KC_SYSTEM_SLEEP: Keycode = Keycode(0x00A6);
pub const KC_SYSTEM_WAKE: Keycode = Keycode(0x00A7);
pub const KC_AUDIO_MUTE: Keycode = Keycode(0x00A8);
pub const KC_AUDIO_VOL_UP: Keycode = Keycode(0x00A9);
pub const KC_AUDIO_VOL_DOWN: Keycode = Keycode(0x00AA);
pub const KC_MEDIA_NEXT_TRACK: Keycode = Keycode(0x00AB);
pub const KC_MEDIA_PREV_TRACK: Keycode = Keycode(0x00AC);
pub const KC_MEDIA_STOP: Keycode = Keycode(0x00AD);
pub const KC_MEDIA_PLAY_PAUSE: Keycode = Keycode(0x00AE);
pub const KC_MEDIA_SELECT: Keycode = Keycode(0x00AF);
pub const KC_MEDIA_EJECT: Keycode = Keycode(0x00B0);
pub const KC_MAIL: Keycode = Keycode(0x00B1);
pub const KC_CALCULATOR: Keycode = Keycode(0x00B2);
pub const KC_MY_COMPUTER: Keycode = Keycode(0x00B3);
pub const KC_WWW_SEARCH: Keycode = Keycode(0x00B4);
pub const KC_WWW_HOME: Keycode = Keycode(0x00B5);
pub const KC_WWW_BACK: Keycode = Keycode(0x00B6);
pub const KC_WWW_FORWARD: Keycode = Keycode(0x00B7);
pub const KC_WWW_STOP: Keycode = Keycode(0x00B8);
pub const KC_WWW_REFRESH: Keycode = Keycode(0x00B9);
pub const KC_WWW_FAVORITES: Keycode = Keycode(0x00BA);
pub const KC_MEDIA_FAST_FORWARD: Keycode = Keycode(0x00BB);
pub const KC_MEDIA_REWIND: Keycode = Keycode(0x00BC);
pub const KC_BRIGHTNESS_UP: Keycode = Keycode(0x00BD);
pub const KC_BRIGHTNESS_DOWN: Keycode = Keycode(0x00BE);
pub const KC_FN0: Keycode = Keycode(0x00C0);
pub const KC_FN1: Keycode = Keycode(0x00C1);
pub const KC_FN2: Keycode = Keycode(0x00C2);
pub const KC_FN3: Keycode = Keycode(0x00C3);
pub const KC_FN4: Keycode = Keycode(0x00C4);
pub const KC_FN5: Keycode = Keycode(0x00C5);
pub const KC_FN6: Keycode = Keycode(0x00C6);
pub const KC_FN7: Keycode = Keycode(0x00C7);
pub const KC_FN8: Keycode = Keycode(0x00C8);
pub const KC_FN9: Keycode = Keycode(0x00C9);
pub const KC_FN10: Keycode = Keycode(0x00CA);
pub const KC_FN11: Keycode = Keycode(0x00CB);
pub const KC_FN12: Keycode = Keycode(0x00CC);
pub const KC_FN13: Keycode = Keycode(0x00CD);
pub const KC_FN14: Keycode = Keycode(0x00CE);
pub const KC_FN15: Keycode = Keycode(0x00CF);
pub const KC_FN16: Keycode = Keycode(0x00D0);
pub const KC_FN17: Keycode = Keycode(0x00D1);
pub const KC_FN18: Keycode = Keycode(0x00D2);
pub const KC_FN19: Keycode = Keycode(0x00D3);
pub const KC_FN20: Keycode = Keycode(0x00D4);
pub const KC_FN21: Keycode = Keycode(0x00D5);
pub const KC_FN22: Keycode = Keycode(0x00D6);
pub const KC_FN23: Keycode = Keycode(0x00D7);
pub const KC_FN24: Keycode = Keycode(0x00D8);
pub const KC_FN25: Keycode = Keycode(0x00D9);
pub const KC_FN26: Keycode = Keycode(0x00DA);
pub const KC_FN27: Keycode = Keycode(0x00DB);
pub const KC_FN28: Keycode = Keycode(0x00DC);
pub const KC_FN29: Keycode = Keycode(0x00DD);
pub const KC_FN30: Keycode = Keycode(0x00DE);
pub const KC_FN31: Keycode = Keycode(0x00DF);
pub const KC_LEFT_CTRL: Keycode = Keycode(0x00E0);
pub const KC_LEFT_SHIFT: Keycode = Keycode(0x00E1);
pub const KC_LEFT_ALT: Keycode = Keycode(0x00E2);
pub const KC_LEFT_GUI: Keycode = Keycode(0x00E3);
pub const KC_RIGHT_CTRL: Keycode = Keycode(0x00E4);
pub const KC_RIGHT_SHIFT: Keycode = Keycode(0x00E5);
pub const KC_RIGHT_ALT: Keycode = Keycode(0x00E6);
pub const KC_RIGHT_GUI: Keycode = Keycode(0x00E7);
pub const KC_MS_UP: Keycode = Keycode(0x00F0);
pub const KC_MS_DOWN: Keycode = Keycode(0x00F1);
pub const KC_MS_LEFT: Keycode = Keycode(0x00F2);
pub const KC_MS_RIGHT: Keycode = Keycode(0x00F3);
pub const KC_MS_BTN1: Keycode = Keycode(0x00F4);
pub const KC_MS_BTN2: Keycode = Keycode(0x00F5);
pub const KC_MS_BTN3: Keycode = Keycode(0x00F6);
pub const KC_MS_BTN4: Keycode = Keycode(0x00F7);
pub const KC_MS_BTN5: Keycode = Keycode(0x00F8);
pub const KC_MS_WH_UP: Keycode = Keycode(0x00F9);
pub const KC_MS_WH_DOWN: Keycode = Keycode(0x00FA);
pub const KC_MS_WH_LEFT: Keycode = Keycode(0x00FB);
pub const KC_MS_WH_RIGHT: Keycode = Keycode(0x00FC);
pub const KC_MS_ACCEL0: Keycode = Keycode(0x00FD);
pub const KC_MS_ACCEL1: Keycode = Keycode(0x00FE);
pub const KC_MS_ACCEL2: Keycode = Keycode(0x00FF);
pub const FN_MO13: Keycode = Keycode(0x5F10);
pub const FN_MO23: Keycode = Keycode(0x5F11);
pub const MACRO00: Keycode = Keycode(0x5F12);
pub const MACRO01: Keycode = Keycode(0x5F13);
pub const MACRO02: Keycode = Keycode(0x5F14);
pub const MACRO03: Keycode = Keycode(0x5F15);
pub const MACRO04: Keycode = Keycode(0x5F16);
pub const MACRO05: Keycode = Keycode(0x5F17);
pub const MACRO06: Keycode = Keycode(0x5F18);
pub const MACRO07: Keycode = Keycode(0x5F19);
pub const MACRO08: Keycode = Keycode(0x5F1A);
pub const MACRO09: Keycode = Keycode(0x5F1B);
pub const MACRO10: Keycode = Keycode(0x5F1C);
pub const MACRO11: Keycode = Keycode(0x5F1D);
pub const MACRO12: Keycode = Keycode(0x5F1E);
pub const MACRO13: Keycode = Keycode(0x5F1F);
pub const MACRO14: Keycode = Keycode(0x5F20);
pub const MACRO15: Keycode = Keycode(0x5F21);
pub const USER00: Keycode = Keycode(0x5F80);
pub const USER01: Keycode = Keycode(0x5F81);
pub const USER02: Keycode = Keycode(0x5F82);
pub const USER03: Keycode = Keycode(0x5F83);
pub const USER04: Keycode = Keycode(0x5F84);
pub const USER05: Keycode = Keycode(0x5F85);
pub const USER06: Keycode = Keycode(0x5F86);
pub const USER07: Keycode = Keycode(0x5F87);
pub const USER08: Keycode = Keycode(0x5F88);
pub const USER09: Keycode = Keycode(0x5F89);
pub const USER10: Keycode = Keycode(0x5F8A);
pub const USER11: Keycode = Keycode(0x5F8B);
pub const USER12: Keycode = Keycode(0x5F8C);
pub const USER13: Keycode = Keycode(0x5F8D);
pub const USER14: Keycode = Keycode(0x5F8E);
pub const USER15: Keycode = Keycode(0x5F8F);

/// One display name per keycode value.
pub(super) static CANONICAL_NAMES: &[(Keycode, &str)] = &[
    (KC_NO, "KC_NO"),
    (KC_TRANSPARENT, "KC_TRANSPARENT"),
    (KC_POST_FAIL, "KC_POST_FAIL"),
    (KC_UNDEFINED, "KC_UNDEFINED"),
    (KC_A, "KC_A"),
    (KC_B, "KC_B"),
    (KC_C, "KC_C"),
    (KC_D, "KC_D"),
    (KC_E, "KC_E"),
    (KC_F, "KC_F"),
    (KC_G, "KC_G"),
    (KC_H, "KC_H"),
    (KC_I, "KC_I"),
    (KC_J, "KC_J"),
    (KC_K, "KC_K"),
    (KC_L, "KC_L"),
    (KC_M, "KC_M"),
    (KC_N, "KC_N"),
    (KC_O, "KC_O"),
    (KC_P, "KC_P"),
    (KC_Q, "KC_Q"),
    (KC_R, "KC_R"),
    (KC_S, "KC_S"),
    (KC_T, "KC_T"),
    (KC_U, "KC_U"),
    (KC_V, "KC_V"),
    (KC_W, "KC_W"),
    (KC_X, "KC_X"),
    (KC_Y, "KC_Y"),
    (KC_Z, "KC_Z"),
    (KC_1, "KC_1"),
    (KC_2, "KC_2"),
    (KC_3, "KC_3"),
    (KC_4, "KC_4"),
    (KC_5, "KC_5"),
    (KC_6, "KC_6"),
    (KC_7, "KC_7"),
    (KC_8, "KC_8"),
    (KC_9, "KC_9"),
    (KC_0, "KC_0"),
    (KC_ENTER, "KC_ENTER"),
    (KC_ESCAPE, "KC_ESCAPE"),
    (KC_BACKSPACE, "KC_BACKSPACE"),
    (KC_TAB, "KC_TAB"),
    (KC_SPACE, "KC_SPACE"),
    (KC_MINUS, "KC_MINUS"),
    (KC_EQUAL, "KC_EQUAL"),
    (KC_LEFT_BRACKET, "KC_LEFT_BRACKET"),
    (KC_RIGHT_BRACKET, "KC_RIGHT_BRACKET"),
    (KC_BACKSLASH, "KC_BACKSLASH"),
    (KC_NONUS_HASH, "KC_NONUS_HASH"),
    (KC_SEMICOLON, "KC_SEMICOLON"),
    (KC_QUOTE, "KC_QUOTE"),
    (KC_GRAVE, "KC_GRAVE"),
    (KC_COMMA, "KC_COMMA"),
    (KC_DOT, "KC_DOT"),
    (KC_SLASH, "KC_SLASH"),
    (KC_CAPS_LOCK, "KC_CAPS_LOCK"),
    (KC_F1, "KC_F1"),
    (KC_F2, "KC_F2"),
    (KC_F3, "KC_F3"),
    (KC_F4, "KC_F4"),
    (KC_F5, "KC_F5"),
    (KC_F6, "KC_F6"),
    (KC_F7, "KC_F7"),
    (KC_F8, "KC_F8"),
    (KC_F9, "KC_F9"),
    (KC_F10, "KC_F10"),
    (KC_F11, "KC_F11"),
    (KC_F12, "KC_F12"),
    (KC_PRINT_SCREEN, "KC_PRINT_SCREEN"),
    (KC_SCROLL_LOCK, "KC_SCROLL_LOCK"),
    (KC_PAUSE, "KC_PAUSE"),
    (KC_INSERT, "KC_INSERT"),
    (KC_HOME, "KC_HOME"),
    (KC_PAGE_UP, "KC_PAGE_UP"),
    (KC_DELETE, "KC_DELETE"),
    (KC_END, "KC_END"),
    (KC_PAGE_DOWN, "KC_PAGE_DOWN"),
    (KC_RIGHT, "KC_RIGHT"),
    (KC_LEFT, "KC_LEFT"),
    (KC_DOWN, "KC_DOWN"),
    (KC_UP, "KC_UP"),
    (KC_NUM_LOCK, "KC_NUM_LOCK"),
    (KC_KP_SLASH, "KC_KP_SLASH"),
    (KC_KP_ASTERISK, "KC_KP_ASTERISK"),
    (KC_KP_MINUS, "KC_KP_MINUS"),
    (KC_KP_PLUS, "KC_KP_PLUS"),
    (KC_KP_ENTER, "KC_KP_ENTER"),
    (KC_KP_1, "KC_KP_1"),
    (KC_KP_2, "KC_KP_2"),
    (KC_KP_3, "KC_KP_3"),
    (KC_KP_4, "KC_KP_4"),
    (KC_KP_5, "KC_KP_5"),
    (KC_KP_6, "KC_KP_6"),
    (KC_KP_7, "KC_KP_7"),
    (KC_KP_8, "KC_KP_8"),
    (KC_KP_9, "KC_KP_9"),
    (KC_KP_0, "KC_KP_0"),
    (KC_KP_DOT, "KC_KP_DOT"),
    (KC_NONUS_BACKSLASH, "KC_NONUS_BACKSLASH"),
    (KC_APPLICATION, "KC_APPLICATION"),
    (KC_KB_POWER, "KC_KB_POWER"),
    (KC_KP_EQUAL, "KC_KP_EQUAL"),
    (KC_F13, "KC_F13"),
    (KC_F14, "KC_F14"),
    (KC_F15, "KC_F15"),
    (KC_F16, "KC_F16"),
    (KC_F17, "KC_F17"),
    (KC_F18, "KC_F18"),
    (KC_F19, "KC_F19"),
    (KC_F20, "KC_F20"),
    (KC_F21, "KC_F21"),
    (KC_F22, "KC_F22"),
    (KC_F23, "KC_F23"),
    (KC_F24, "KC_F24"),
    (KC_EXECUTE, "KC_EXECUTE"),
    (KC_HELP, "KC_HELP"),
    (KC_MENU, "KC_MENU"),
    (KC_SELECT, "KC_SELECT"),
    (KC_STOP, "KC_STOP"),
    (KC_AGAIN, "KC_AGAIN"),
    (KC_UNDO, "KC_UNDO"),
    (KC_CUT, "KC_CUT"),
    (KC_COPY, "KC_COPY"),
    (KC_PASTE, "KC_PASTE"),
    (KC_FIND, "KC_FIND"),
    (KC_KB_MUTE, "KC_KB_MUTE"),
    (KC_KB_VOLUME_UP, "KC_KB_VOLUME_UP"),
    (KC_KB_VOLUME_DOWN, "KC_KB_VOLUME_DOWN"),
    (KC_LOCKING_CAPS_LOCK, "KC_LOCKING_CAPS_LOCK"),
    (KC_LOCKING_NUM_LOCK, "KC_LOCKING_NUM_LOCK"),
    (KC_LOCKING_SCROLL_LOCK, "KC_LOCKING_SCROLL_LOCK"),
    (KC_KP_COMMA, "KC_KP_COMMA"),
    (KC_KP_EQUAL_AS400, "KC_KP_EQUAL_AS400"),
    (KC_INTERNATIONAL_1, "KC_INTERNATIONAL_1"),
    (KC_INTERNATIONAL_2, "KC_INTERNATIONAL_2"),
    (KC_INTERNATIONAL_3, "KC_INTERNATIONAL_3"),
    (KC_INTERNATIONAL_4, "KC_INTERNATIONAL_4"),
    (KC_INTERNATIONAL_5, "KC_INTERNATIONAL_5"),
    (KC_INTERNATIONAL_6, "KC_INTERNATIONAL_6"),
    (KC_INTERNATIONAL_7, "KC_INTERNATIONAL_7"),
    (KC_INTERNATIONAL_8, "KC_INTERNATIONAL_8"),
    (KC_INTERNATIONAL_9, "KC_INTERNATIONAL_9"),
    (KC_LANGUAGE_1, "KC_LANGUAGE_1"),
    (KC_LANGUAGE_2, "KC_LANGUAGE_2"),
    (KC_LANGUAGE_3, "KC_LANGUAGE_3"),
    (KC_LANGUAGE_4, "KC_LANGUAGE_4"),
    (KC_LANGUAGE_5, "KC_LANGUAGE_5"),
    (KC_LANGUAGE_6, "KC_LANGUAGE_6"),
    (KC_LANGUAGE_7, "KC_LANGUAGE_7"),
    (KC_LANGUAGE_8, "KC_LANGUAGE_8"),
    (KC_LANGUAGE_9, "KC_LANGUAGE_9"),
    (KC_ALTERNATE_ERASE, "KC_ALTERNATE_ERASE"),
    (KC_SYSTEM_REQUEST, "KC_SYSTEM_REQUEST"),
    (KC_CANCEL, "KC_CANCEL"),
    (KC_CLEAR, "KC_CLEAR"),
    (KC_PRIOR, "KC_PRIOR"),
    (KC_RETURN, "KC_RETURN"),
    (KC_SEPARATOR, "KC_SEPARATOR"),
    (KC_OUT, "KC_OUT"),
    (KC_OPER, "KC_OPER"),
    (KC_CLEAR_AGAIN, "KC_CLEAR_AGAIN"),
    (KC_CRSEL, "KC_CRSEL"),
    (KC_EXSEL, "KC_EXSEL"),
    (KC_SYSTEM_POWER, "KC_SYSTEM_POWER"),
    (KC_SYSTEM_SLEEP, "KC_SYSTEM_SLEEP"),
    (KC_SYSTEM_WAKE, "KC_SYSTEM_WAKE"),
    (KC_AUDIO_MUTE, "KC_AUDIO_MUTE"),
    (KC_AUDIO_VOL_UP, "KC_AUDIO_VOL_UP"),
    (KC_AUDIO_VOL_DOWN, "KC_AUDIO_VOL_DOWN"),
    (KC_MEDIA_NEXT_TRACK, "KC_MEDIA_NEXT_TRACK"),
    (KC_MEDIA_PREV_TRACK, "KC_MEDIA_PREV_TRACK"),
    (KC_MEDIA_STOP, "KC_MEDIA_STOP"),
    (KC_MEDIA_PLAY_PAUSE, "KC_MEDIA_PLAY_PAUSE"),
    (KC_MEDIA_SELECT, "KC_MEDIA_SELECT"),
    (KC_MEDIA_EJECT, "KC_MEDIA_EJECT"),
    (KC_MAIL, "KC_MAIL"),
    (KC_CALCULATOR, "KC_CALCULATOR"),
    (KC_MY_COMPUTER, "KC_MY_COMPUTER"),
    (KC_WWW_SEARCH, "KC_WWW_SEARCH"),
    (KC_WWW_HOME, "KC_WWW_HOME"),
    (KC_WWW_BACK, "KC_WWW_BACK"),
    (KC_WWW_FORWARD, "KC_WWW_FORWARD"),
    (KC_WWW_STOP, "KC_WWW_STOP"),
    (KC_WWW_REFRESH, "KC_WWW_REFRESH"),
    (KC_WWW_FAVORITES, "KC_WWW_FAVORITES"),
    (KC_MEDIA_FAST_FORWARD, "KC_MEDIA_FAST_FORWARD"),
    (KC_MEDIA_REWIND, "KC_MEDIA_REWIND"),
    (KC_BRIGHTNESS_UP, "KC_BRIGHTNESS_UP"),
    (KC_BRIGHTNESS_DOWN, "KC_BRIGHTNESS_DOWN"),
    (KC_FN0, "KC_FN0"),
    (KC_FN1, "KC_FN1"),
    (KC_FN2, "KC_FN2"),
    (KC_FN3, "KC_FN3"),
    (KC_FN4, "KC_FN4"),
    (KC_FN5, "KC_FN5"),
    (KC_FN6, "KC_FN6"),
    (KC_FN7, "KC_FN7"),
    (KC_FN8, "KC_FN8"),
    (KC_FN9, "KC_FN9"),
    (KC_FN10, "KC_FN10"),
    (KC_FN11, "KC_FN11"),
    (KC_FN12, "KC_FN12"),
    (KC_FN13, "KC_FN13"),
    (KC_FN14, "KC_FN14"),
    (KC_FN15, "KC_FN15"),
    (KC_FN16, "KC_FN16"),
    (KC_FN17, "KC_FN17"),
    (KC_FN18, "KC_FN18"),
    (KC_FN19, "KC_FN19"),
    (KC_FN20, "KC_FN20"),
    (KC_FN21, "KC_FN21"),
    (KC_FN22, "KC_FN22"),
    (KC_FN23, "KC_FN23"),
    (KC_FN24, "KC_FN24"),
    (KC_FN25, "KC_FN25"),
    (KC_FN26, "KC_FN26"),
    (KC_FN27, "KC_FN27"),
    (KC_FN28, "KC_FN28"),
    (KC_FN29, "KC_FN29"),
    (KC_FN30, "KC_FN30"),
    (KC_FN31, "KC_FN31"),
    (KC_LEFT_CTRL, "KC_LEFT_CTRL"),
    (KC_LEFT_SHIFT, "KC_LEFT_SHIFT"),
    (KC_LEFT_ALT, "KC_LEFT_ALT"),
    (KC_LEFT_GUI, "KC_LEFT_GUI"),
    (KC_RIGHT_CTRL, "KC_RIGHT_CTRL"),
    (KC_RIGHT_SHIFT, "KC_RIGHT_SHIFT"),
    (KC_RIGHT_ALT, "KC_RIGHT_ALT"),
    (KC_RIGHT_GUI, "KC_RIGHT_GUI"),
    (KC_MS_UP, "KC_MS_UP"),
    (KC_MS_DOWN, "KC_MS_DOWN"),
    (KC_MS_LEFT, "KC_MS_LEFT"),
    (KC_MS_RIGHT, "KC_MS_RIGHT"),
    (KC_MS_BTN1, "KC_MS_BTN1"),
    (KC_MS_BTN2, "KC_MS_BTN2"),
    (KC_MS_BTN3, "KC_MS_BTN3"),
    (KC_MS_BTN4, "KC_MS_BTN4"),
    (KC_MS_BTN5, "KC_MS_BTN5"),
    (KC_MS_WH_UP, "KC_MS_WH_UP"),
    (KC_MS_WH_DOWN, "KC_MS_WH_DOWN"),
    (KC_MS_WH_LEFT, "KC_MS_WH_LEFT"),
    (KC_MS_WH_RIGHT, "KC_MS_WH_RIGHT"),
    (KC_MS_ACCEL0, "KC_MS_ACCEL0"),
    (KC_MS_ACCEL1, "KC_MS_ACCEL1"),
    (KC_MS_ACCEL2, "KC_MS_ACCEL2"),
    (FN_MO13, "FN_MO13"),
    (FN_MO23, "FN_MO23"),
    (MACRO00, "MACRO00"),
    (MACRO01, "MACRO01"),
    (MACRO02, "MACRO02"),
    (MACRO03, "MACRO03"),
    (MACRO04, "MACRO04"),
    (MACRO05, "MACRO05"),
    (MACRO06, "MACRO06"),
    (MACRO07, "MACRO07"),
    (MACRO08, "MACRO08"),
    (MACRO09, "MACRO09"),
    (MACRO10, "MACRO10"),
    (MACRO11, "MACRO11"),
    (MACRO12, "MACRO12"),
    (MACRO13, "MACRO13"),
    (MACRO14, "MACRO14"),
    (MACRO15, "MACRO15"),
    (USER00, "USER00"),
    (USER01, "USER01"),
    (USER02, "USER02"),
    (USER03, "USER03"),
    (USER04, "USER04"),
    (USER05, "USER05"),
    (USER06, "USER06"),
    (USER07, "USER07"),
    (USER08, "USER08"),
    (USER09, "USER09"),
    (USER10, "USER10"),
    (USER11, "USER11"),
    (USER12, "USER12"),
    (USER13, "USER13"),
    (USER14, "USER14"),
    (USER15, "USER15"),
];

/// Upper-cased names accepted by [`Keycode::from_name`], `KC_` prefix removed.
pub(super) static NAME_ALIASES: &[(&str, Keycode)] = &[
    ("TRANSPARENT", KC_TRANSPARENT),
    ("TRNS", KC_TRANSPARENT),
    ("ENT", KC_ENTER),
    ("ESC", KC_ESCAPE),
    ("BSPC", KC_BACKSPACE),
    ("SPC", KC_SPACE),
    ("MINS", KC_MINUS),
    ("EQL", KC_EQUAL),
    ("LBRC", KC_LEFT_BRACKET),
    ("RBRC", KC_RIGHT_BRACKET),
    ("BSLS", KC_BACKSLASH),
    ("NUHS", KC_NONUS_HASH),
    ("SCLN", KC_SEMICOLON),
    ("QUOT", KC_QUOTE),
    ("GRV", KC_GRAVE),
    ("COMM", KC_COMMA),
    ("SLSH", KC_SLASH),
    ("NUBS", KC_NONUS_BACKSLASH),
    ("CAPS", KC_CAPS_LOCK),
    ("SCRL", KC_SCROLL_LOCK),
    ("NUM", KC_NUM_LOCK),
    ("LCAP", KC_LOCKING_CAPS_LOCK),
    ("LNUM", KC_LOCKING_NUM_LOCK),
    ("LSCR", KC_LOCKING_SCROLL_LOCK),
    ("PSCR", KC_PRINT_SCREEN),
    ("PAUS", KC_PAUSE),
    ("BRK", KC_PAUSE),
    ("INS", KC_INSERT),
    ("PGUP", KC_PAGE_UP),
    ("DEL", KC_DELETE),
    ("PGDN", KC_PAGE_DOWN),
    ("RGHT", KC_RIGHT),
    ("APP", KC_APPLICATION),
    ("EXEC", KC_EXECUTE),
    ("SLCT", KC_SELECT),
    ("AGIN", KC_AGAIN),
    ("PSTE", KC_PASTE),
    ("ERAS", KC_ALTERNATE_ERASE),
    ("SYRQ", KC_SYSTEM_REQUEST),
    ("CNCL", KC_CANCEL),
    ("CLR", KC_CLEAR),
    ("PRIR", KC_PRIOR),
    ("RETN", KC_RETURN),
    ("SEPR", KC_SEPARATOR),
    ("CLAG", KC_CLEAR_AGAIN),
    ("CRSL", KC_CRSEL),
    ("EXSL", KC_EXSEL),
    ("PSLS", KC_KP_SLASH),
    ("PAST", KC_KP_ASTERISK),
    ("PMNS", KC_KP_MINUS),
    ("PPLS", KC_KP_PLUS),
    ("PENT", KC_KP_ENTER),
    ("P1", KC_KP_1),
    ("P2", KC_KP_2),
    ("P3", KC_KP_3),
    ("P4", KC_KP_4),
    ("P5", KC_KP_5),
    ("P6", KC_KP_6),
    ("P7", KC_KP_7),
    ("P8", KC_KP_8),
    ("P9", KC_KP_9),
    ("P0", KC_KP_0),
    ("PDOT", KC_KP_DOT),
    ("PEQL", KC_KP_EQUAL),
    ("PCMM", KC_KP_COMMA),
    ("INT1", KC_INTERNATIONAL_1),
    ("INT2", KC_INTERNATIONAL_2),
    ("INT3", KC_INTERNATIONAL_3),
    ("INT4", KC_INTERNATIONAL_4),
    ("INT5", KC_INTERNATIONAL_5),
    ("INT6", KC_INTERNATIONAL_6),
    ("INT7", KC_INTERNATIONAL_7),
    ("INT8", KC_INTERNATIONAL_8),
    ("INT9", KC_INTERNATIONAL_9),
    ("LNG1", KC_LANGUAGE_1),
    ("LNG2", KC_LANGUAGE_2),
    ("LNG3", KC_LANGUAGE_3),
    ("LNG4", KC_LANGUAGE_4),
    ("LNG5", KC_LANGUAGE_5),
    ("LNG6", KC_LANGUAGE_6),
    ("LNG7", KC_LANGUAGE_7),
    ("LNG8", KC_LANGUAGE_8),
    ("LNG9", KC_LANGUAGE_9),
    ("LCTL", KC_LEFT_CTRL),
    ("LSFT", KC_LEFT_SHIFT),
    ("LALT", KC_LEFT_ALT),
    ("LOPT", KC_LEFT_ALT),
    ("LGUI", KC_LEFT_GUI),
    ("LCMD", KC_LEFT_GUI),
    ("LWIN", KC_LEFT_GUI),
    ("RCTL", KC_RIGHT_CTRL),
    ("RSFT", KC_RIGHT_SHIFT),
    ("RALT", KC_RIGHT_ALT),
    ("ALGR", KC_RIGHT_ALT),
    ("ROPT", KC_RIGHT_ALT),
    ("RGUI", KC_RIGHT_GUI),
    ("RCMD", KC_RIGHT_GUI),
    ("RWIN", KC_RIGHT_GUI),
    ("PWR", KC_SYSTEM_POWER),
    ("SLEP", KC_SYSTEM_SLEEP),
    ("WAKE", KC_SYSTEM_WAKE),
    ("MUTE", KC_AUDIO_MUTE),
    ("VOLU", KC_AUDIO_VOL_UP),
    ("VOLD", KC_AUDIO_VOL_DOWN),
    ("MNXT", KC_MEDIA_NEXT_TRACK),
    ("MPRV", KC_MEDIA_PREV_TRACK),
    ("MSTP", KC_MEDIA_STOP),
    ("MPLY", KC_MEDIA_PLAY_PAUSE),
    ("MSEL", KC_MEDIA_SELECT),
    ("EJCT", KC_MEDIA_EJECT),
    ("CALC", KC_CALCULATOR),
    ("MYCM", KC_MY_COMPUTER),
    ("WSCH", KC_WWW_SEARCH),
    ("WHOM", KC_WWW_HOME),
    ("WBAK", KC_WWW_BACK),
    ("WFWD", KC_WWW_FORWARD),
    ("WSTP", KC_WWW_STOP),
    ("WREF", KC_WWW_REFRESH),
    ("WFAV", KC_WWW_FAVORITES),
    ("MFFD", KC_MEDIA_FAST_FORWARD),
    ("MRWD", KC_MEDIA_REWIND),
    ("BRIU", KC_BRIGHTNESS_UP),
    ("BRID", KC_BRIGHTNESS_DOWN),
    ("BRMU", KC_PAUSE),
    ("BRMD", KC_SCROLL_LOCK),
    ("MS_U", KC_MS_UP),
    ("MS_D", KC_MS_DOWN),
    ("MS_L", KC_MS_LEFT),
    ("MS_R", KC_MS_RIGHT),
    ("BTN1", KC_MS_BTN1),
    ("BTN2", KC_MS_BTN2),
    ("BTN3", KC_MS_BTN3),
    ("BTN4", KC_MS_BTN4),
    ("BTN5", KC_MS_BTN5),
    ("BTN6", KC_MS_BTN5),
    ("BTN7", KC_MS_BTN5),
    ("BTN8", KC_MS_BTN5),
    ("WH_U", KC_MS_WH_UP),
    ("WH_D", KC_MS_WH_DOWN),
    ("WH_L", KC_MS_WH_LEFT),
    ("WH_R", KC_MS_WH_RIGHT),
    ("ACL0", KC_MS_ACCEL0),
    ("ACL1", KC_MS_ACCEL1),
    ("ACL2", KC_MS_ACCEL2),
    ("SYSTEM_POWER", KC_SYSTEM_POWER),
    ("SYSTEM_SLEEP", KC_SYSTEM_SLEEP),
    ("SYSTEM_WAKE", KC_SYSTEM_WAKE),
    ("AUDIO_MUTE", KC_AUDIO_MUTE),
    ("AUDIO_VOL_UP", KC_AUDIO_VOL_UP),
    ("AUDIO_VOL_DOWN", KC_AUDIO_VOL_DOWN),
    ("MEDIA_NEXT_TRACK", KC_MEDIA_NEXT_TRACK),
    ("MEDIA_PREV_TRACK", KC_MEDIA_PREV_TRACK),
    ("MEDIA_STOP", KC_MEDIA_STOP),
    ("MEDIA_PLAY_PAUSE", KC_MEDIA_PLAY_PAUSE),
    ("MEDIA_SELECT", KC_MEDIA_SELECT),
    ("MEDIA_EJECT", KC_MEDIA_EJECT),
    ("MAIL", KC_MAIL),
    ("CALCULATOR", KC_CALCULATOR),
    ("MY_COMPUTER", KC_MY_COMPUTER),
    ("WWW_SEARCH", KC_WWW_SEARCH),
    ("WWW_HOME", KC_WWW_HOME),
    ("WWW_BACK", KC_WWW_BACK),
    ("WWW_FORWARD", KC_WWW_FORWARD),
    ("WWW_STOP", KC_WWW_STOP),
    ("WWW_REFRESH", KC_WWW_REFRESH),
    ("WWW_FAVORITES", KC_WWW_FAVORITES),
    ("MEDIA_FAST_FORWARD", KC_MEDIA_FAST_FORWARD),
    ("MEDIA_REWIND", KC_MEDIA_REWIND),
    ("BRIGHTNESS_UP", KC_BRIGHTNESS_UP),
    ("BRIGHTNESS_DOWN", KC_BRIGHTNESS_DOWN),
    ("NO", KC_NO),
    ("ROLL_OVER", KC_TRANSPARENT),
    ("POST_FAIL", KC_POST_FAIL),
    ("UNDEFINED", KC_UNDEFINED),
    ("A", KC_A),
    ("B", KC_B),
    ("C", KC_C),
    ("D", KC_D),
    ("E", KC_E),
    ("F", KC_F),
    ("G", KC_G),
    ("H", KC_H),
    ("I", KC_I),
    ("J", KC_J),
    ("K", KC_K),
    ("L", KC_L),
    ("M", KC_M),
    ("N", KC_N),
    ("O", KC_O),
    ("P", KC_P),
    ("Q", KC_Q),
    ("R", KC_R),
    ("S", KC_S),
    ("T", KC_T),
    ("U", KC_U),
    ("V", KC_V),
    ("W", KC_W),
    ("X", KC_X),
    ("Y", KC_Y),
    ("Z", KC_Z),
    ("1", KC_1),
    ("2", KC_2),
    ("3", KC_3),
    ("4", KC_4),
    ("5", KC_5),
    ("6", KC_6),
    ("7", KC_7),
    ("8", KC_8),
    ("9", KC_9),
    ("0", KC_0),
    ("ENTER", KC_ENTER),
    ("ESCAPE", KC_ESCAPE),
    ("BACKSPACE", KC_BACKSPACE),
    ("TAB", KC_TAB),
    ("SPACE", KC_SPACE),
    ("MINUS", KC_MINUS),
    ("EQUAL", KC_EQUAL),
    ("LEFT_BRACKET", KC_LEFT_BRACKET),
    ("RIGHT_BRACKET", KC_RIGHT_BRACKET),
    ("BACKSLASH", KC_BACKSLASH),
    ("NONUS_HASH", KC_NONUS_HASH),
    ("SEMICOLON", KC_SEMICOLON),
    ("QUOTE", KC_QUOTE),
    ("GRAVE", KC_GRAVE),
    ("COMMA", KC_COMMA),
    ("DOT", KC_DOT),
    ("SLASH", KC_SLASH),
    ("CAPS_LOCK", KC_CAPS_LOCK),
    ("F1", KC_F1),
    ("F2", KC_F2),
    ("F3", KC_F3),
    ("F4", KC_F4),
    ("F5", KC_F5),
    ("F6", KC_F6),
    ("F7", KC_F7),
    ("F8", KC_F8),
    ("F9", KC_F9),
    ("F10", KC_F10),
    ("F11", KC_F11),
    ("F12", KC_F12),
    ("PRINT_SCREEN", KC_PRINT_SCREEN),
    ("SCROLL_LOCK", KC_SCROLL_LOCK),
    ("PAUSE", KC_PAUSE),
    ("INSERT", KC_INSERT),
    ("HOME", KC_HOME),
    ("PAGE_UP", KC_PAGE_UP),
    ("DELETE", KC_DELETE),
    ("END", KC_END),
    ("PAGE_DOWN", KC_PAGE_DOWN),
    ("RIGHT", KC_RIGHT),
    ("LEFT", KC_LEFT),
    ("DOWN", KC_DOWN),
    ("UP", KC_UP),
    ("NUM_LOCK", KC_NUM_LOCK),
    ("KP_SLASH", KC_KP_SLASH),
    ("KP_ASTERISK", KC_KP_ASTERISK),
    ("KP_MINUS", KC_KP_MINUS),
    ("KP_PLUS", KC_KP_PLUS),
    ("KP_ENTER", KC_KP_ENTER),
    ("KP_1", KC_KP_1),
    ("KP_2", KC_KP_2),
    ("KP_3", KC_KP_3),
    ("KP_4", KC_KP_4),
    ("KP_5", KC_KP_5),
    ("KP_6", KC_KP_6),
    ("KP_7", KC_KP_7),
    ("KP_8", KC_KP_8),
    ("KP_9", KC_KP_9),
    ("KP_0", KC_KP_0),
    ("KP_DOT", KC_KP_DOT),
    ("NONUS_BACKSLASH", KC_NONUS_BACKSLASH),
    ("APPLICATION", KC_APPLICATION),
    ("KB_POWER", KC_KB_POWER),
    ("KP_EQUAL", KC_KP_EQUAL),
    ("F13", KC_F13),
    ("F14", KC_F14),
    ("F15", KC_F15),
    ("F16", KC_F16),
    ("F17", KC_F17),
    ("F18", KC_F18),
    ("F19", KC_F19),
    ("F20", KC_F20),
    ("F21", KC_F21),
    ("F22", KC_F22),
    ("F23", KC_F23),
    ("F24", KC_F24),
    ("EXECUTE", KC_EXECUTE),
    ("HELP", KC_HELP),
    ("MENU", KC_MENU),
    ("SELECT", KC_SELECT),
    ("STOP", KC_STOP),
    ("AGAIN", KC_AGAIN),
    ("UNDO", KC_UNDO),
    ("CUT", KC_CUT),
    ("COPY", KC_COPY),
    ("PASTE", KC_PASTE),
    ("FIND", KC_FIND),
    ("KB_MUTE", KC_KB_MUTE),
    ("KB_VOLUME_UP", KC_KB_VOLUME_UP),
    ("KB_VOLUME_DOWN", KC_KB_VOLUME_DOWN),
    ("LOCKING_CAPS_LOCK", KC_LOCKING_CAPS_LOCK),
    ("LOCKING_NUM_LOCK", KC_LOCKING_NUM_LOCK),
    ("LOCKING_SCROLL_LOCK", KC_LOCKING_SCROLL_LOCK),
    ("KP_COMMA", KC_KP_COMMA),
    ("KP_EQUAL_AS400", KC_KP_EQUAL_AS400),
    ("INTERNATIONAL_1", KC_INTERNATIONAL_1),
    ("INTERNATIONAL_2", KC_INTERNATIONAL_2),
    ("INTERNATIONAL_3", KC_INTERNATIONAL_3),
    ("INTERNATIONAL_4", KC_INTERNATIONAL_4),
    ("INTERNATIONAL_5", KC_INTERNATIONAL_5),
    ("INTERNATIONAL_6", KC_INTERNATIONAL_6),
    ("INTERNATIONAL_7", KC_INTERNATIONAL_7),
    ("INTERNATIONAL_8", KC_INTERNATIONAL_8),
    ("INTERNATIONAL_9", KC_INTERNATIONAL_9),
    ("LANGUAGE_1", KC_LANGUAGE_1),
    ("LANGUAGE_2", KC_LANGUAGE_2),
    ("LANGUAGE_3", KC_LANGUAGE_3),
    ("LANGUAGE_4", KC_LANGUAGE_4),
    ("LANGUAGE_5", KC_LANGUAGE_5),
    ("LANGUAGE_6", KC_LANGUAGE_6),
    ("LANGUAGE_7", KC_LANGUAGE_7),
    ("LANGUAGE_8", KC_LANGUAGE_8),
    ("LANGUAGE_9", KC_LANGUAGE_9),
    ("ALTERNATE_ERASE", KC_ALTERNATE_ERASE),
    ("SYSTEM_REQUEST", KC_SYSTEM_REQUEST),
    ("CANCEL", KC_CANCEL),
    ("CLEAR", KC_CLEAR),
    ("PRIOR", KC_PRIOR),
    ("RETURN", KC_RETURN),
    ("SEPARATOR", KC_SEPARATOR),
    ("OUT", KC_OUT),
    ("OPER", KC_OPER),
    ("CLEAR_AGAIN", KC_CLEAR_AGAIN),
    ("CRSEL", KC_CRSEL),
    ("EXSEL", KC_EXSEL),
    ("LEFT_CTRL", KC_LEFT_CTRL),
    ("LEFT_SHIFT", KC_LEFT_SHIFT),
    ("LEFT_ALT", KC_LEFT_ALT),
    ("LEFT_GUI", KC_LEFT_GUI),
    ("RIGHT_CTRL", KC_RIGHT_CTRL),
    ("RIGHT_SHIFT", KC_RIGHT_SHIFT),
    ("RIGHT_ALT", KC_RIGHT_ALT),
    ("RIGHT_GUI", KC_RIGHT_GUI),
    ("FN0", KC_FN0),
    ("FN1", KC_FN1),
    ("FN2", KC_FN2),
    ("FN3", KC_FN3),
    ("FN4", KC_FN4),
    ("FN5", KC_FN5),
    ("FN6", KC_FN6),
    ("FN7", KC_FN7),
    ("FN8", KC_FN8),
    ("FN9", KC_FN9),
    ("FN10", KC_FN10),
    ("FN11", KC_FN11),
    ("FN12", KC_FN12),
    ("FN13", KC_FN13),
    ("FN14", KC_FN14),
    ("FN15", KC_FN15),
    ("FN16", KC_FN16),
    ("FN17", KC_FN17),
    ("FN18", KC_FN18),
    ("FN19", KC_FN19),
    ("FN20", KC_FN20),
    ("FN21", KC_FN21),
    ("FN22", KC_FN22),
    ("FN23", KC_FN23),
    ("FN24", KC_FN24),
    ("FN25", KC_FN25),
    ("FN26", KC_FN26),
    ("FN27", KC_FN27),
    ("FN28", KC_FN28),
    ("FN29", KC_FN29),
    ("FN30", KC_FN30),
    ("FN31", KC_FN31),
    ("MS_UP", KC_MS_UP),
    ("MS_DOWN", KC_MS_DOWN),
    ("MS_LEFT", KC_MS_LEFT),
    ("MS_RIGHT", KC_MS_RIGHT),
    ("MS_BTN1", KC_MS_BTN1),
    ("MS_BTN2", KC_MS_BTN2),
    ("MS_BTN3", KC_MS_BTN3),
    ("MS_BTN4", KC_MS_BTN4),
    ("MS_BTN5", KC_MS_BTN5),
    ("MS_BTN6", KC_MS_BTN5),
    ("MS_BTN7", KC_MS_BTN5),
    ("MS_BTN8", KC_MS_BTN5),
    ("MS_WH_UP", KC_MS_WH_UP),
    ("MS_WH_DOWN", KC_MS_WH_DOWN),
    ("MS_WH_LEFT", KC_MS_WH_LEFT),
    ("MS_WH_RIGHT", KC_MS_WH_RIGHT),
    ("MS_ACCEL0", KC_MS_ACCEL0),
    ("MS_ACCEL1", KC_MS_ACCEL1),
    ("MS_ACCEL2", KC_MS_ACCEL2),
    ("BSPACE", KC_BACKSPACE),
    ("LBRACKET", KC_LEFT_BRACKET),
    ("RBRACKET", KC_RIGHT_BRACKET),
    ("BSLASH", KC_BACKSLASH),
    ("SCOLON", KC_SEMICOLON),
    ("CAPSLOCK", KC_CAPS_LOCK),
    ("PSCREEN", KC_PRINT_SCREEN),
    ("SCROLLLOCK", KC_SCROLL_LOCK),
    ("PGDOWN", KC_PAGE_DOWN),
    ("NUMLOCK", KC_NUM_LOCK),
    ("NONUS_BSLASH", KC_NONUS_BACKSLASH),
    ("POWER", KC_KB_POWER),
    ("_MUTE", KC_KB_MUTE),
    ("_VOLUP", KC_KB_VOLUME_UP),
    ("_VOLDOWN", KC_KB_VOLUME_DOWN),
    ("LOCKING_CAPS", KC_LOCKING_CAPS_LOCK),
    ("LOCKING_NUM", KC_LOCKING_NUM_LOCK),
    ("LOCKING_SCROLL", KC_LOCKING_SCROLL_LOCK),
    ("LANG1", KC_LANGUAGE_1),
    ("LANG2", KC_LANGUAGE_2),
    ("LANG3", KC_LANGUAGE_3),
    ("LANG4", KC_LANGUAGE_4),
    ("LANG5", KC_LANGUAGE_5),
    ("LANG6", KC_LANGUAGE_6),
    ("LANG7", KC_LANGUAGE_7),
    ("LANG8", KC_LANGUAGE_8),
    ("LANG9", KC_LANGUAGE_9),
    ("ALT_ERASE", KC_ALTERNATE_ERASE),
    ("SYSREQ", KC_SYSTEM_REQUEST),
    ("LSHIFT", KC_LEFT_SHIFT),
    ("RCTRL", KC_RIGHT_CTRL),
    ("RSHIFT", KC_RIGHT_SHIFT),
    ("RO", KC_INTERNATIONAL_1),
    ("KANA", KC_INTERNATIONAL_2),
    ("JYEN", KC_INTERNATIONAL_3),
    ("HENK", KC_INTERNATIONAL_4),
    ("MHEN", KC_INTERNATIONAL_5),
    ("HAEN", KC_LANGUAGE_1),
    ("HANJ", KC_LANGUAGE_2),
    ("SLCK", KC_SCROLL_LOCK),
    ("NLCK", KC_NUM_LOCK),
    ("FN_MO13", FN_MO13),
    ("FN_MO23", FN_MO23),
    ("MACRO00", MACRO00),
    ("MACRO01", MACRO01),
    ("MACRO02", MACRO02),
    ("MACRO03", MACRO03),
    ("MACRO04", MACRO04),
    ("MACRO05", MACRO05),
    ("MACRO06", MACRO06),
    ("MACRO07", MACRO07),
    ("MACRO08", MACRO08),
    ("MACRO09", MACRO09),
    ("MACRO10", MACRO10),
    ("MACRO11", MACRO11),
    ("MACRO12", MACRO12),
    ("MACRO13", MACRO13),
    ("MACRO14", MACRO14),
    ("MACRO15", MACRO15),
    ("USER00", USER00),
    ("USER01", USER01),
    ("USER02", USER02),
    ("USER03", USER03),
    ("USER04", USER04),
    ("USER05", USER05),
    ("USER06", USER06),
    ("USER07", USER07),
    ("USER08", USER08),
    ("USER09", USER09),
    ("USER10", USER10),
    ("USER11", USER11),
    ("USER12", USER12),
    ("USER13", USER13),
    ("USER14", USER14),
    ("USER15", USER15),
];
