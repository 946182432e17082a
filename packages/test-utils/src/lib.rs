//! Wire-format vectors for tests: two consecutive blocks of the public
//! `gaia-13007` testnet in the amino encoding a relayer ships them in,
//! plus a legacy store-proof capture from the same network.

/// Block 10000 of `gaia-13007`: header, commit, and validator set.
const HEADER_10000_HEX: &str = "0aad020a02080a120a676169612d313330303718904e220b08cf86f8ef0510869ea13a305d3a480a201864d4fff0c864\
     13801f6d00b8a42080311a4751e792daf1e301d5545986994e122408011220212ed39f6859a2ce4505fd78f12d18d07f\
     5f52e868fca07eaaa380ed4d44404142204aae7c9169492bb1bd43b05b558db4b58e33b09938dae9b50cc8457f2341c1\
     0252209493d756ec5538cf367f1eb60ea607ce6b9b90bfaf5303c0c90f8d28c9b764ac5a209493d756ec5538cf367f1e\
     b60ea607ce6b9b90bfaf5303c0c90f8d28c9b764ac62200f2908883a105c793b74495eb7d6df2eea479ed7fc9349206a\
     65cb0f9987a0b86a208ec94a3cd9b68ace10067b95e43842b6ce599a54af402c7f3a6bbfa3a8965e2c820114099b2ec2\
     e2adcdd37281ad383a2d51e437cfc92412bd130a480a2002cb52df134dc60da7a5a17a46181f6e016ad274051afa0e58\
     76a7d06e0666f7122408011220124f14738b6366089e27f7efd48533680e3a625fa4823bdddeb1e29844badbd712b501\
     080210904e22480a2002cb52df134dc60da7a5a17a46181f6e016ad274051afa0e5876a7d06e0666f712240801122012\
     4f14738b6366089e27f7efd48533680e3a625fa4823bdddeb1e29844badbd72a0c08d486f8ef0510e3fba5e702321409\
     9b2ec2e2adcdd37281ad383a2d51e437cfc92442401247ff95bf55c3083fcda1d936ba65c7f6aa7f5998902d059f834d\
     e016bac1a43e3756af63edea565bd2c31b9ca8a33da2dfdbb56f44ee7478d395b8a8acf10e12b701080210904e22480a\
     2002cb52df134dc60da7a5a17a46181f6e016ad274051afa0e5876a7d06e0666f7122408011220124f14738b6366089e\
     27f7efd48533680e3a625fa4823bdddeb1e29844badbd72a0c08d486f8ef0510a9f687820332141717093479fdf705e9\
     defc4242321ff97acdc19d38014240e2f9bdce54f2ac25873ec3c420f4f8ebff8556b3eca884278ca67ede3ae1715a85\
     d57a949d3103e7ed225466cfc81ea1591da72425fe73f9329af049437ef50d12b701080210904e22480a2002cb52df13\
     4dc60da7a5a17a46181f6e016ad274051afa0e5876a7d06e0666f7122408011220124f14738b6366089e27f7efd48533\
     680e3a625fa4823bdddeb1e29844badbd72a0c08d386f8ef0510c6b585e2023214193b773f29e934cddabf2b4b68ebfd\
     d588a24678380242407d54374d4b3eb5866fb2c06f44d7a48d9f6ab47de78705aaf64a70b4cf92ead7aa1aacdaa3a4c5\
     22e9ae15b742015fa5d73029978ddb5cf19cb6065ecd267d0612b701080210904e22480a2002cb52df134dc60da7a5a1\
     7a46181f6e016ad274051afa0e5876a7d06e0666f7122408011220124f14738b6366089e27f7efd48533680e3a625fa4\
     823bdddeb1e29844badbd72a0c08d486f8ef051091e8e08a0332141ef22e447b2ab74a268a9a4a80f0f512212bea6f38\
     03424026d10598d99957a477ebfc1f22179415caf4e59caaf6f076d7d15445e73caeec3373cec7ade4e364d9c1540345\
     cb190002c691ac37f8f47500836390d87b990112b701080210904e22480a2002cb52df134dc60da7a5a17a46181f6e01\
     6ad274051afa0e5876a7d06e0666f7122408011220124f14738b6366089e27f7efd48533680e3a625fa4823bdddeb1e2\
     9844badbd72a0c08d486f8ef0510b08897830332142b89383448acc1dd6b870385c16342f0f3950c31380442401dcec8\
     996acbd1c546b39f5865ca85c5e65e9b2be949a61270e7953d823380b4dbeb1e914910e0bce3a6207d6a6a51885b7680\
     e36a42d0c784d26576b74c250712b701080210904e22480a2002cb52df134dc60da7a5a17a46181f6e016ad274051afa\
     0e5876a7d06e0666f7122408011220124f14738b6366089e27f7efd48533680e3a625fa4823bdddeb1e29844badbd72a\
     0c08d486f8ef0510f5aee1e502321430486633a0aa2c19c8236e3a2e3f03c069320d8138054240b8ae34cba30732594c\
     a70ac1aacfa437a40e8db7695749a8209d57f3fe9ae1e52e9c77a8d8fa1ae3b27094de45e63b5627a6334d9b43bee0d3\
     e4aade9c6e1a0512b701080210904e22480a2002cb52df134dc60da7a5a17a46181f6e016ad274051afa0e5876a7d06e\
     0666f7122408011220124f14738b6366089e27f7efd48533680e3a625fa4823bdddeb1e29844badbd72a0c08d486f8ef\
     0510d6d6ec8703321432d45e3d9eb4aa86858203657d05fe16c4d617d338064240eb7b1edfd17840d3d71cfdcb9953ca\
     e78916de47d930db35dd72210ff201e7056b1bd85fcd42f33759d8c5c0d9ea04381ef4d24d6c911a31a00a4d97a4d89a\
     0912b701080210904e22480a2002cb52df134dc60da7a5a17a46181f6e016ad274051afa0e5876a7d06e0666f7122408\
     011220124f14738b6366089e27f7efd48533680e3a625fa4823bdddeb1e29844badbd72a0c08d486f8ef0510cfafc6ed\
     02321442b5514cee989836e2a39af0f5184ced480923b538074240043db7a0ea4f5aef9291f3bff894443f4930b530a9\
     e842a1e0b2fe5cdc1b3b3944e5b9fa22e39b1607cd4d27eb1643f062ea2cc198ae51da4d6072f668d5630a120012b601\
     080210904e22480a2002cb52df134dc60da7a5a17a46181f6e016ad274051afa0e5876a7d06e0666f712240801122012\
     4f14738b6366089e27f7efd48533680e3a625fa4823bdddeb1e29844badbd72a0b08d386f8ef051096ef914c3214a494\
     f0968398acc7904a90d6970bd44ef4ce347f3809424059969595e8e8974731494188c2655c0cc98796f4a303db5cf1a8\
     c6b003d8b76b70bbcffb8f4b46ffb6b99f6ef67a56561459a0b3dfe9c62a6b397d617cc0d70112b701080210904e2248\
     0a2002cb52df134dc60da7a5a17a46181f6e016ad274051afa0e5876a7d06e0666f7122408011220124f14738b636608\
     9e27f7efd48533680e3a625fa4823bdddeb1e29844badbd72a0c08d486f8ef0510d285edec023214a68b3d8f585b920f\
     0cfb084b1cb66b8a926f8907380a4240a3af8623098038d7ca5a656dfeeeeca19b32f6bca4825f4cc6b0f78ed89695de\
     707dc755370b7f7aa5bf90e0d42bc9ca9326addd6cd04a6f4d231d9b8b31ff0312b701080210904e22480a2002cb52df\
     134dc60da7a5a17a46181f6e016ad274051afa0e5876a7d06e0666f7122408011220124f14738b6366089e27f7efd485\
     33680e3a625fa4823bdddeb1e29844badbd72a0c08d486f8ef05109695dff9023214b0febe5cc472b7fd8b97c55a2261\
     65523b8c80f5380b424024a3f51d6f2d45e9ef3dacee83b2d4d19c0e81bd7647ff23582ec694e5b5000d505c2ccc16cf\
     d81c0733a3f486f0d8bca5fff8fc9b14623e7cf7f20bcaae5e0a120012b701080210904e22480a2002cb52df134dc60d\
     a7a5a17a46181f6e016ad274051afa0e5876a7d06e0666f7122408011220124f14738b6366089e27f7efd48533680e3a\
     625fa4823bdddeb1e29844badbd72a0c08d486f8ef051087b9e782033214bc58b93fd5ec48da8e29afd353a87c0b4c94\
     e9df380d424052554e7dae311733bd5c315ed289ce7003cf17951f5c6914b7f2ee2629dae77a362e6be9350c8b5d14e9\
     977845e47417b0c5f2fc21d5936b250fd24f2c12dc0d12b701080210904e22480a2002cb52df134dc60da7a5a17a4618\
     1f6e016ad274051afa0e5876a7d06e0666f7122408011220124f14738b6366089e27f7efd48533680e3a625fa4823bdd\
     deb1e29844badbd72a0c08d486f8ef0510c6e9e6e9023214ce5124e032e9a98d2a44e6d6c13fcba1ee2d443f380e4240\
     b5fede2ec519deaa7ca238c0e8436fd8a11b8e19ef591d9ad6d633ca308880ca6db2c4343a29a579c79eb37d2bbe8ac2\
     f1063cae5e33696d9fc08ddcdb739d0d1a4c0a14099b2ec2e2adcdd37281ad383a2d51e437cfc92412251624de64201b\
     7f9f3bbfcce69aecedc371471d92158ed95924d68515f7db56b3bd0dbd1fca18d0860320919aeaffffffffffff011a4a\
     0a141717093479fdf705e9defc4242321ff97acdc19d12251624de64206bee2aeba37718de65e92e73f06c56995eb982\
     bf38da7c6f24d7579ad3da87131803209bf7d8ffffffffffff011a450a14193b773f29e934cddabf2b4b68ebfdd588a2\
     467812251624de64206ec1bd2dc04db6259a0a7635ffa14eccb208faa902688d894683fd544c67856718d0860320bab8\
     0f1a450a141ef22e447b2ab74a268a9a4a80f0f512212bea6f12251624de64209fb70c212d71429f95f1e7ca3956e567\
     93298b1dc10f98595459fec331a04ce818d0860320b9b80f1a450a142b89383448acc1dd6b870385c16342f0f3950c31\
     12251624de64206d4a8dbaa9035f357c6efdf6b380086eff27a5f9cf4d919734445cbb9c98067618a58703208fba081a\
     450a1430486633a0aa2c19c8236e3a2e3f03c069320d8112251624de64201d87fd2c0494d269e9c75be5918f320c4756\
     c487a16d75555faea57dbe8493cb18d0860320b9b80f1a4c0a1432d45e3d9eb4aa86858203657d05fe16c4d617d31225\
     1624de6420d8ce09129ed710c9db0f823f660c20472e5949588f69add434e3dd25cede3e8018d0860320a59cf5ffffff\
     ffffff011a450a1442b5514cee989836e2a39af0f5184ced480923b512251624de6420acb885d1c6c018c37ae27ef3d7\
     ab65301a2569b3009cafd4aab24537413c6d1d18d0860320bebe0d1a4c0a1498e21228648a20e7f3227cc93e89cf0632\
     23045912251624de6420ccc67b30eb8bfdc2ad194c1fee0fe4354218dac6db2ce9b58ad583d4a3106e8118d0860320d5\
     bceaffffffffffff011a450a14a494f0968398acc7904a90d6970bd44ef4ce347f12251624de6420326eacb58b635ae7\
     af46b156308fd8aa1beddd5b90752129be4d082d033cce6318d0860320b8b80f1a450a14a68b3d8f585b920f0cfb084b\
     1cb66b8a926f890712251624de64205ab81acc09b40b4d09cabf28a8f270e750909858eae2cfe1c21f48074553966318\
     d0860320d0b90c1a440a14b0febe5cc472b7fd8b97c55a226165523b8c80f512251624de6420329630f26416a5aa01cb\
     2d985a63b464db44e60b41efab6a7d19420fa99651d318904e20cd850b1a4a0a14b7614527ab9650de12403896e1bad3\
     42bde6990c12251624de64208997c1ee9e0dafb8995c129060aef359400026f8946868d16c5fcf609299d794180120f3\
     8fdcffffffffffff011a450a14bc58b93fd5ec48da8e29afd353a87c0b4c94e9df12251624de64209a1cd7e2aabee8a5\
     64979e891d5c9c40ce7abb66e999f72a0388626bf3ea54b318d0860320b8b90c1a450a14ce5124e032e9a98d2a44e6d6\
     c13fcba1ee2d443f12251624de64209b56c227c8477bb22802ea65b2a6738f2154ffec395cbfd5f35d0fa0510578e718\
     d0860320e7b209";

/// Block 10001 of `gaia-13007`, signed by the validator set that block
/// 10000 committed to in `next_validators_hash`.
const HEADER_10001_HEX: &str = "0aae020a02080a120a676169612d313330303718914e220c08d486f8ef0510d285edec02305d3a480a2002cb52df134d\
     c60da7a5a17a46181f6e016ad274051afa0e5876a7d06e0666f7122408011220124f14738b6366089e27f7efd4853368\
     0e3a625fa4823bdddeb1e29844badbd74220315d2437192bae2bc606b040c6377908f294f51a1c826a000f6233f2cd2c\
     583152209493d756ec5538cf367f1eb60ea607ce6b9b90bfaf5303c0c90f8d28c9b764ac5a209493d756ec5538cf367f\
     1eb60ea607ce6b9b90bfaf5303c0c90f8d28c9b764ac62200f2908883a105c793b74495eb7d6df2eea479ed7fc934920\
     6a65cb0f9987a0b86a20a271a678f37d0fae455698e3f2e59f2243c04d2dc922e0a6ed19c6c25337b88d820114193b77\
     3f29e934cddabf2b4b68ebfdd588a2467812be130a480a20dd73c370015d9aca8dbd7edea4d9e88da840b6818e23b4bd\
     48fb32b74557e6ea122408011220f928830926270ed750a1ba920d1007126e02fbaca04c771fea03185fc42f8f4312b5\
     01080210914e22480a20dd73c370015d9aca8dbd7edea4d9e88da840b6818e23b4bd48fb32b74557e6ea122408011220\
     f928830926270ed750a1ba920d1007126e02fbaca04c771fea03185fc42f8f432a0c08da86f8ef0510a8dce09d023214\
     099b2ec2e2adcdd37281ad383a2d51e437cfc9244240b6e5364f9b14e010803180658f2ee2add16c9e63a554f48823f8\
     8ed3d5f9018036bb44bc510ed8b8f9bd4fac7a2e49cd5e422d7b3f130891d78abe1127a2ef0412b701080210914e2248\
     0a20dd73c370015d9aca8dbd7edea4d9e88da840b6818e23b4bd48fb32b74557e6ea122408011220f928830926270ed7\
     50a1ba920d1007126e02fbaca04c771fea03185fc42f8f432a0c08da86f8ef05109fe6b1ce0232141717093479fdf705\
     e9defc4242321ff97acdc19d38014240ae01223bd2f5730321eccc2d883eb4295c30c84cec072571c21cf91853f8c0a9\
     e77142cd9d143a9170fbe7e2b616797ce6760c1035da1f3338a6822d7d77d60e12b701080210914e22480a20dd73c370\
     015d9aca8dbd7edea4d9e88da840b6818e23b4bd48fb32b74557e6ea122408011220f928830926270ed750a1ba920d10\
     07126e02fbaca04c771fea03185fc42f8f432a0c08d986f8ef0510a68fe585033214193b773f29e934cddabf2b4b68eb\
     fdd588a24678380242407853669f7804291e8b04e0e2c3cc4e4297c458d8dbb1c261d4e331bfa7252868f0aa62b705de\
     5c1727a96dd2ac1bbb2b23c1cd727048b5b3d92443bc3adf7a0b12b701080210914e22480a20dd73c370015d9aca8dbd\
     7edea4d9e88da840b6818e23b4bd48fb32b74557e6ea122408011220f928830926270ed750a1ba920d1007126e02fbac\
     a04c771fea03185fc42f8f432a0c08da86f8ef051096ffa5bb0232141ef22e447b2ab74a268a9a4a80f0f512212bea6f\
     380342404c771f4ffd2789ebb157597ed981fb3e2338b432596eec04f9c88614d2199629f1584cc3b2407abbbf2935f6\
     9148391b5a22d5bb40d55f9fa717c08a980e640d12b701080210914e22480a20dd73c370015d9aca8dbd7edea4d9e88d\
     a840b6818e23b4bd48fb32b74557e6ea122408011220f928830926270ed750a1ba920d1007126e02fbaca04c771fea03\
     185fc42f8f432a0c08da86f8ef0510e5b78ca00232142b89383448acc1dd6b870385c16342f0f3950c3138044240c28c\
     777bc51fd58f1d82b2a36ffc165c339dd0319568eb09f857a94e43776cba5067e5895be8f26fb95a71b660687d5ca30e\
     f0feb2fe5144de33fb17c9190f0312b701080210914e22480a20dd73c370015d9aca8dbd7edea4d9e88da840b6818e23\
     b4bd48fb32b74557e6ea122408011220f928830926270ed750a1ba920d1007126e02fbaca04c771fea03185fc42f8f43\
     2a0c08da86f8ef05108883a9d302321430486633a0aa2c19c8236e3a2e3f03c069320d8138054240fd9e5a1e28a49ffd\
     f9883fdcc2e47e366d2986f2a6b50e8ec545b7be9e609d7f681765fde01236e14ff2017abf2ab9e33118aa668d3ac04e\
     dadeb6e1a6fffe0e12b701080210914e22480a20dd73c370015d9aca8dbd7edea4d9e88da840b6818e23b4bd48fb32b7\
     4557e6ea122408011220f928830926270ed750a1ba920d1007126e02fbaca04c771fea03185fc42f8f432a0c08da86f8\
     ef0510ce9daea002321432d45e3d9eb4aa86858203657d05fe16c4d617d33806424087c2759a453157a56eea0f13c5eb\
     c8e1af97d5df44640809e203525fdb37ea73f35b40f3fdb10abdbf5ea99a8f0d4dc70aff985195a6b56f14333ee5cb0c\
     450e12b701080210914e22480a20dd73c370015d9aca8dbd7edea4d9e88da840b6818e23b4bd48fb32b74557e6ea1224\
     08011220f928830926270ed750a1ba920d1007126e02fbaca04c771fea03185fc42f8f432a0c08da86f8ef0510febda1\
     cf02321442b5514cee989836e2a39af0f5184ced480923b538074240b3b1e4d05905118fd4ff176e535da718ddcbf27c\
     59ec0748209b18f09b2da8fff614dd0ddbcfced998f36ac98b4d58bdd2b5e5faa3d14f1a51824460aebb580e120012b7\
     01080210914e22480a20dd73c370015d9aca8dbd7edea4d9e88da840b6818e23b4bd48fb32b74557e6ea122408011220\
     f928830926270ed750a1ba920d1007126e02fbaca04c771fea03185fc42f8f432a0c08d886f8ef051085a7e1c6033214\
     a494f0968398acc7904a90d6970bd44ef4ce347f38094240855cd0a041a8ac69fb4f6925880655398a35130a743fedfe\
     c99782275ea3ac6afac95a21704767f33a911daead867cecb28f9c00dd84de60682e6718aeeb870912b701080210914e\
     22480a20dd73c370015d9aca8dbd7edea4d9e88da840b6818e23b4bd48fb32b74557e6ea122408011220f92883092627\
     0ed750a1ba920d1007126e02fbaca04c771fea03185fc42f8f432a0c08da86f8ef051086d8b5bc023214a68b3d8f585b\
     920f0cfb084b1cb66b8a926f8907380a424041985840f4a4ffde1fe9ca83f36bf892a46de1a0e038343ed46ccd3040ea\
     ef789f1f59e1a02b7ab1b8e435da2c64d5ab40a58f809d642801e1936f8cfdc84d0a12b701080210914e22480a20dd73\
     c370015d9aca8dbd7edea4d9e88da840b6818e23b4bd48fb32b74557e6ea122408011220f928830926270ed750a1ba92\
     0d1007126e02fbaca04c771fea03185fc42f8f432a0c08da86f8ef0510c5ffdfeb023214b0febe5cc472b7fd8b97c55a\
     226165523b8c80f5380b4240bbdb5b18bf8f91fefac4a66be3a3b86ae4f8eef317a155cef4f6caa9c15869919ff191f7\
     6b1b38eb16b1fb05cd6c2745241d4a8f9abc26f64ec4f14461236804120012b701080210914e22480a20dd73c370015d\
     9aca8dbd7edea4d9e88da840b6818e23b4bd48fb32b74557e6ea122408011220f928830926270ed750a1ba920d100712\
     6e02fbaca04c771fea03185fc42f8f432a0c08da86f8ef0510d1c492ce023214bc58b93fd5ec48da8e29afd353a87c0b\
     4c94e9df380d4240af3a58737b2513b7d670b964103778030b7ffde012812faf2c4340da138a4d40af8a7eb83b633cd2\
     15496939dc9c580514df5c80e1a15a4cef17aa8f6596460212b701080210914e22480a20dd73c370015d9aca8dbd7ede\
     a4d9e88da840b6818e23b4bd48fb32b74557e6ea122408011220f928830926270ed750a1ba920d1007126e02fbaca04c\
     771fea03185fc42f8f432a0c08da86f8ef05108fbdecd4023214ce5124e032e9a98d2a44e6d6c13fcba1ee2d443f380e\
     4240a8d56a8da870cf949e41d5ee030b1c6ee6a1d726866832430015b3ef3fc27e8bd710719dd0d61f44a110da9bb0da\
     e0b8937c29f7e5773974066ec477f473110e1a4c0a14099b2ec2e2adcdd37281ad383a2d51e437cfc92412251624de64\
     201b7f9f3bbfcce69aecedc371471d92158ed95924d68515f7db56b3bd0dbd1fca18d0860320e1a0edffffffffffff01\
     1a4a0a141717093479fdf705e9defc4242321ff97acdc19d12251624de64206bee2aeba37718de65e92e73f06c56995e\
     b982bf38da7c6f24d7579ad3da87131803209ef7d8ffffffffffff011a4c0a14193b773f29e934cddabf2b4b68ebfdd5\
     88a2467812251624de64206ec1bd2dc04db6259a0a7635ffa14eccb208faa902688d894683fd544c67856718d0860320\
     e1a0edffffffffffff011a450a141ef22e447b2ab74a268a9a4a80f0f512212bea6f12251624de64209fb70c212d7142\
     9f95f1e7ca3956e56793298b1dc10f98595459fec331a04ce818d086032089bf121a450a142b89383448acc1dd6b8703\
     85c16342f0f3950c3112251624de64206d4a8dbaa9035f357c6efdf6b380086eff27a5f9cf4d919734445cbb9c980676\
     18a5870320b4c10b1a450a1430486633a0aa2c19c8236e3a2e3f03c069320d8112251624de64201d87fd2c0494d269e9\
     c75be5918f320c4756c487a16d75555faea57dbe8493cb18d086032089bf121a4c0a1432d45e3d9eb4aa86858203657d\
     05fe16c4d617d312251624de6420d8ce09129ed710c9db0f823f660c20472e5949588f69add434e3dd25cede3e8018d0\
     860320f5a2f8ffffffffffff011a450a1442b5514cee989836e2a39af0f5184ced480923b512251624de6420acb885d1\
     c6c018c37ae27ef3d7ab65301a2569b3009cafd4aab24537413c6d1d18d08603208ec5101a4c0a1498e21228648a20e7\
     f3227cc93e89cf063223045912251624de6420ccc67b30eb8bfdc2ad194c1fee0fe4354218dac6db2ce9b58ad583d4a3\
     106e8118d0860320a5c3edffffffffffff011a450a14a494f0968398acc7904a90d6970bd44ef4ce347f12251624de64\
     20326eacb58b635ae7af46b156308fd8aa1beddd5b90752129be4d082d033cce6318d086032088bf121a450a14a68b3d\
     8f585b920f0cfb084b1cb66b8a926f890712251624de64205ab81acc09b40b4d09cabf28a8f270e750909858eae2cfe1\
     c21f48074553966318d0860320a0c00f1a440a14b0febe5cc472b7fd8b97c55a226165523b8c80f512251624de642032\
     9630f26416a5aa01cb2d985a63b464db44e60b41efab6a7d19420fa99651d318904e20ddd30b1a4a0a14b7614527ab96\
     50de12403896e1bad342bde6990c12251624de64208997c1ee9e0dafb8995c129060aef359400026f8946868d16c5fcf\
     609299d794180120f48fdcffffffffffff011a450a14bc58b93fd5ec48da8e29afd353a87c0b4c94e9df12251624de64\
     209a1cd7e2aabee8a564979e891d5c9c40ce7abb66e999f72a0388626bf3ea54b318d086032088c00f1a450a14ce5124\
     e032e9a98d2a44e6d6c13fcba1ee2d443f12251624de64209b56c227c8477bb22802ea65b2a6738f2154ffec395cbfd5\
     f35d0fa0510578e718d0860320b7b90c";

/// A store proof for an account under the `acc` substore, captured in the
/// pre-ics23 op format (`iavl:v` + `multistore` ops). Kept as a fixture
/// for the malformed/unknown-op error paths.
const LEGACY_PROOF_HEX: &str = "0abc020a066961766c3a761215014de5e0db8c727e3f0bd34054c2ae5e450fd029721a9a0298020a95020a29080c1025\
     18904e2a20187abd33eaf95d44bcc547ae4d14685b497b3ab008f247f7922abb9e2354f6120a290808100d18864d2220\
     23d506a7e11b356f82afc811ea97fad934c7dafbf65f237620a56a91044eb8220a290806100718864d2220eb2bd0aa6c\
     b2a42efa7a748483addeee4451f2ba6f392f7e53c6d377911832790a290804100418864d2a20bbc93f20c198a88dc498\
     cf302dad2af3751d2d7d3a79605d4bc48f4f08e474400a290802100218864d2a20e7846c65a79c3de205ec66b3dc5455\
     e02dfd4b2dcb2ae8e7b244d59d24c805fd1a3c0a15014de5e0db8c727e3f0bd34054c2ae5e450fd029721220e9062ffa\
     7a56aefbdd9d8abe5627d7e8f90f04cfbc0cb0fe6ad8e31d1c20950618bd020ae3030a0a6d756c746973746f72651203\
     6163631acf03cd030aca030a2f0a046d696e7412270a2508904e122027f3839f1cbf6b64691decf2d0c53a25ed01c470\
     1c8ad56b4e5c55d53f42ce360a2f0a046d61696e12270a2508904e122053b4300f5972c812ba19f6741d7ea102cd0685\
     2d648257521aefee565954e4790a320a077374616b696e6712270a2508904e1220a0ab3e8ca4cd98f6802576db6d1e09\
     290dcd6fe93ef78f0d3c58a861daf281560a330a08736c617368696e6712270a2508904e1220f527b1da101472c4214f\
     110a6508efb9cdb5c5c38138f22f654d28822c5d23ce0a310a06706172616d7312270a2508904e1220643156e9f056be\
     28a099e51cb44c6e9a8339b4676b5079d571c7fd4bc9231be20a370a0c646973747269627574696f6e12270a2508904e\
     1220b426a1501cf22d577ee3c859d962cf83fc010d60ee410e53b9670a53a628d3c90a2e0a03676f7612270a2508904e\
     12204d5306f3ea08a49fbc6a8763323bcaf104c0c089f325fc57903e3349b5d5597d0a310a06737570706c7912270a25\
     08904e12206ad1cc23efd842cb84fa8031912285cff38f35920cc513a876ef2360930b2d4e0a2e0a0361636312270a25\
     08904e1220a2765987d658cb713211124a731fcd367b1a83ec380a600747f4c87fcd5e0ea0";

/// The leaf value the legacy proof commits to.
const LEGACY_VALUE_HEX: &str = "0a362f6163632f2530314d254535254530254442253843727e2533462530422544334054254332254145253545452530\
     46254430253239721246f6e4f8380a144de5e0db8c727e3f0bd34054c2ae5e450fd029721a26eb5ae987210356ecd9c2\
     5d4565106c1c2e7d03e165c481bb7f55a291053ea7886964b7eec8ae20162801";

pub fn gaia_header_10000() -> Vec<u8> {
    hex::decode(HEADER_10000_HEX).unwrap()
}

pub fn gaia_header_10001() -> Vec<u8> {
    hex::decode(HEADER_10001_HEX).unwrap()
}

pub fn legacy_store_proof() -> Vec<u8> {
    hex::decode(LEGACY_PROOF_HEX).unwrap()
}

pub fn legacy_store_value() -> Vec<u8> {
    hex::decode(LEGACY_VALUE_HEX).unwrap()
}

pub const GAIA_CHAIN_ID: &str = "gaia-13007";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_decode() {
        assert_eq!(gaia_header_10000().len(), 3895);
        assert_eq!(gaia_header_10001().len(), 3904);
        assert_eq!(legacy_store_proof().len(), 805);
        assert_eq!(legacy_store_value().len(), 128);
    }
}
