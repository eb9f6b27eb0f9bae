// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Quarter-wave sine table.

/// `sin(i / 10 degrees) * 1024`, rounded, for `i` in `0..=900`.
/// Monotonically non-decreasing; rescaled to `FRAC_BITS` at lookup.
pub static SIN_TABLE_90: [i16; 901] = [
    0, 2, 4, 5, 7, 9, 11, 13, 14, 16, 18, 20, 21, 23, 25,
    27, 29, 30, 32, 34, 36, 38, 39, 41, 43, 45, 46, 48, 50, 52,
    54, 55, 57, 59, 61, 63, 64, 66, 68, 70, 71, 73, 75, 77, 79,
    80, 82, 84, 86, 87, 89, 91, 93, 95, 96, 98, 100, 102, 103, 105,
    107, 109, 111, 112, 114, 116, 118, 119, 121, 123, 125, 127, 128, 130, 132,
    134, 135, 137, 139, 141, 143, 144, 146, 148, 150, 151, 153, 155, 157, 158,
    160, 162, 164, 165, 167, 169, 171, 173, 174, 176, 178, 180, 181, 183, 185,
    187, 188, 190, 192, 194, 195, 197, 199, 201, 202, 204, 206, 208, 209, 211,
    213, 215, 216, 218, 220, 222, 223, 225, 227, 229, 230, 232, 234, 236, 237,
    239, 241, 243, 244, 246, 248, 249, 251, 253, 255, 256, 258, 260, 262, 263,
    265, 267, 268, 270, 272, 274, 275, 277, 279, 281, 282, 284, 286, 287, 289,
    291, 293, 294, 296, 298, 299, 301, 303, 305, 306, 308, 310, 311, 313, 315,
    316, 318, 320, 322, 323, 325, 327, 328, 330, 332, 333, 335, 337, 338, 340,
    342, 344, 345, 347, 349, 350, 352, 354, 355, 357, 359, 360, 362, 364, 365,
    367, 369, 370, 372, 374, 375, 377, 379, 380, 382, 384, 385, 387, 389, 390,
    392, 394, 395, 397, 398, 400, 402, 403, 405, 407, 408, 410, 412, 413, 415,
    416, 418, 420, 421, 423, 425, 426, 428, 430, 431, 433, 434, 436, 438, 439,
    441, 442, 444, 446, 447, 449, 450, 452, 454, 455, 457, 459, 460, 462, 463,
    465, 466, 468, 470, 471, 473, 474, 476, 478, 479, 481, 482, 484, 485, 487,
    489, 490, 492, 493, 495, 496, 498, 500, 501, 503, 504, 506, 507, 509, 510,
    512, 514, 515, 517, 518, 520, 521, 523, 524, 526, 527, 529, 530, 532, 534,
    535, 537, 538, 540, 541, 543, 544, 546, 547, 549, 550, 552, 553, 555, 556,
    558, 559, 561, 562, 564, 565, 567, 568, 570, 571, 573, 574, 576, 577, 579,
    580, 581, 583, 584, 586, 587, 589, 590, 592, 593, 595, 596, 598, 599, 600,
    602, 603, 605, 606, 608, 609, 611, 612, 613, 615, 616, 618, 619, 621, 622,
    623, 625, 626, 628, 629, 630, 632, 633, 635, 636, 637, 639, 640, 642, 643,
    644, 646, 647, 649, 650, 651, 653, 654, 655, 657, 658, 660, 661, 662, 664,
    665, 666, 668, 669, 670, 672, 673, 674, 676, 677, 679, 680, 681, 683, 684,
    685, 687, 688, 689, 690, 692, 693, 694, 696, 697, 698, 700, 701, 702, 704,
    705, 706, 707, 709, 710, 711, 713, 714, 715, 716, 718, 719, 720, 722, 723,
    724, 725, 727, 728, 729, 730, 732, 733, 734, 735, 737, 738, 739, 740, 742,
    743, 744, 745, 746, 748, 749, 750, 751, 753, 754, 755, 756, 757, 759, 760,
    761, 762, 763, 765, 766, 767, 768, 769, 770, 772, 773, 774, 775, 776, 777,
    779, 780, 781, 782, 783, 784, 786, 787, 788, 789, 790, 791, 792, 794, 795,
    796, 797, 798, 799, 800, 801, 803, 804, 805, 806, 807, 808, 809, 810, 811,
    812, 813, 815, 816, 817, 818, 819, 820, 821, 822, 823, 824, 825, 826, 827,
    828, 829, 831, 832, 833, 834, 835, 836, 837, 838, 839, 840, 841, 842, 843,
    844, 845, 846, 847, 848, 849, 850, 851, 852, 853, 854, 855, 856, 857, 858,
    859, 860, 861, 862, 863, 864, 865, 866, 867, 867, 868, 869, 870, 871, 872,
    873, 874, 875, 876, 877, 878, 879, 880, 880, 881, 882, 883, 884, 885, 886,
    887, 888, 889, 889, 890, 891, 892, 893, 894, 895, 896, 896, 897, 898, 899,
    900, 901, 902, 902, 903, 904, 905, 906, 907, 907, 908, 909, 910, 911, 912,
    912, 913, 914, 915, 916, 916, 917, 918, 919, 920, 920, 921, 922, 923, 923,
    924, 925, 926, 927, 927, 928, 929, 930, 930, 931, 932, 933, 933, 934, 935,
    935, 936, 937, 938, 938, 939, 940, 940, 941, 942, 943, 943, 944, 945, 945,
    946, 947, 947, 948, 949, 949, 950, 951, 951, 952, 953, 953, 954, 955, 955,
    956, 957, 957, 958, 959, 959, 960, 960, 961, 962, 962, 963, 963, 964, 965,
    965, 966, 966, 967, 968, 968, 969, 969, 970, 971, 971, 972, 972, 973, 973,
    974, 974, 975, 976, 976, 977, 977, 978, 978, 979, 979, 980, 980, 981, 981,
    982, 982, 983, 983, 984, 984, 985, 985, 986, 986, 987, 987, 988, 988, 989,
    989, 990, 990, 990, 991, 991, 992, 992, 993, 993, 994, 994, 994, 995, 995,
    996, 996, 997, 997, 997, 998, 998, 999, 999, 999, 1000, 1000, 1000, 1001, 1001,
    1002, 1002, 1002, 1003, 1003, 1003, 1004, 1004, 1004, 1005, 1005, 1006, 1006, 1006, 1007,
    1007, 1007, 1007, 1008, 1008, 1008, 1009, 1009, 1009, 1010, 1010, 1010, 1011, 1011, 1011,
    1011, 1012, 1012, 1012, 1012, 1013, 1013, 1013, 1014, 1014, 1014, 1014, 1015, 1015, 1015,
    1015, 1015, 1016, 1016, 1016, 1016, 1017, 1017, 1017, 1017, 1017, 1018, 1018, 1018, 1018,
    1018, 1019, 1019, 1019, 1019, 1019, 1019, 1020, 1020, 1020, 1020, 1020, 1020, 1021, 1021,
    1021, 1021, 1021, 1021, 1021, 1022, 1022, 1022, 1022, 1022, 1022, 1022, 1022, 1022, 1023,
    1023, 1023, 1023, 1023, 1023, 1023, 1023, 1023, 1023, 1023, 1023, 1023, 1023, 1024, 1024,
    1024, 1024, 1024, 1024, 1024, 1024, 1024, 1024, 1024, 1024, 1024, 1024, 1024, 1024, 1024,
    1024,
];
